//! Time module for sidereal time calculations
//!
//! This module turns a UTC calendar instant into a Julian date and from there
//! into the Greenwich Mean Sidereal Time angle that orients the Earth-fixed
//! frame against the inertial one.
//!
//! The Julian date follows the Fliegel & Van Flandern integer algorithm for
//! the Gregorian calendar. GMST uses the IAU 1982 polynomial in seconds of time.

use crate::constants::{
    DAY_S, EARTH_ANGVEL, GMST_C0_S, GMST_C1_S, GMST_C2_S, GMST_C3_S, J2000, JULIAN_CENTURY_DAYS,
    TAU,
};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Calendar instant in UTC
///
/// Every component is an `f64` so that fractional or out-of-range values pass
/// straight through the Julian date formula. Nothing is validated: a month of
/// 13 gives a defined, if physically meaningless, Julian date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarTime {
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl CalendarTime {
    /// Create a calendar instant from its components
    pub fn new(year: f64, month: f64, day: f64, hour: f64, minute: f64, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian date of this instant
    pub fn julian_date(&self) -> f64 {
        julian_date(self)
    }

    /// Greenwich Mean Sidereal Time of this instant in radians, in `[0, 2π)`
    pub fn gmst_rad(&self) -> f64 {
        gmst_rad(self.julian_date())
    }

    /// Convert to a chrono UTC datetime
    ///
    /// Fails when the components do not name a real calendar instant. Seconds
    /// may be fractional; every other component must be integral.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        let whole = |value: f64, name: &str| -> Result<i64> {
            if value.is_finite() && value.fract() == 0.0 {
                Ok(value as i64)
            } else {
                Err(TimeError::OutOfRange(format!("{} = {}", name, value)))
            }
        };

        let year = whole(self.year, "year")?;
        let month = whole(self.month, "month")?;
        let day = whole(self.day, "day")?;
        let hour = whole(self.hour, "hour")?;
        let minute = whole(self.minute, "minute")?;

        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::OutOfRange(format!("second = {}", self.second)));
        }
        let second = self.second.trunc() as u32;
        let nanos = ((self.second - self.second.trunc()) * 1e9).round().min(999_999_999.0) as u32;

        let date = i32::try_from(year)
            .ok()
            .zip(u32::try_from(month).ok())
            .zip(u32::try_from(day).ok())
            .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d))
            .ok_or_else(|| TimeError::OutOfRange(format!("{}-{}-{}", year, month, day)))?;

        let naive = u32::try_from(hour)
            .ok()
            .zip(u32::try_from(minute).ok())
            .and_then(|(h, m)| date.and_hms_nano_opt(h, m, second, nanos))
            .ok_or_else(|| {
                TimeError::OutOfRange(format!("{:02}:{:02}:{}", hour, minute, self.second))
            })?;

        Ok(Utc.from_utc_datetime(&naive))
    }
}

impl From<DateTime<Utc>> for CalendarTime {
    fn from(dt: DateTime<Utc>) -> Self {
        let second = dt.second() as f64 + dt.nanosecond() as f64 / 1e9;
        CalendarTime::new(
            dt.year() as f64,
            dt.month() as f64,
            dt.day() as f64,
            dt.hour() as f64,
            dt.minute() as f64,
            second,
        )
    }
}

impl From<(f64, f64, f64, f64, f64, f64)> for CalendarTime {
    fn from(t: (f64, f64, f64, f64, f64, f64)) -> Self {
        CalendarTime::new(t.0, t.1, t.2, t.3, t.4, t.5)
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Integer quotient truncated toward zero, as in the algorithm's Fortran form
fn idiv(numerator: f64, denominator: f64) -> f64 {
    (numerator / denominator).trunc()
}

/// Julian day number of the calendar date (noon-referenced)
///
/// Each quotient is truncated where it occurs, not once on the sum.
pub fn julian_day_number(time: &CalendarTime) -> f64 {
    let CalendarTime {
        year, month, day, ..
    } = *time;

    let a = idiv(month - 14.0, 12.0);
    day - 32075.0 + idiv(1461.0 * (year + 4800.0 + a), 4.0)
        + idiv(367.0 * (month - 2.0 - a * 12.0), 12.0)
        - idiv(3.0 * idiv(year + 4900.0 + a, 100.0), 4.0)
}

/// Fraction of the day elapsed since midnight
pub fn day_fraction(time: &CalendarTime) -> f64 {
    (time.second + 60.0 * (time.minute + 60.0 * time.hour)) / DAY_S
}

/// Julian date of a calendar instant
pub fn julian_date(time: &CalendarTime) -> f64 {
    let jd_midnight = julian_day_number(time) - 0.5;
    jd_midnight + day_fraction(time)
}

/// Julian centuries of UT1 elapsed since J2000.0
pub fn julian_centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / JULIAN_CENTURY_DAYS
}

/// GMST in seconds of time, before any range reduction
pub fn gmst_seconds(jd: f64) -> f64 {
    let t = julian_centuries_since_j2000(jd);
    GMST_C0_S + GMST_C1_S * t + GMST_C2_S * t * t + GMST_C3_S * t * t * t
}

/// Greenwich Mean Sidereal Time in radians, in `[0, 2π)`
///
/// The seconds are reduced modulo one day before scaling by the Earth rotation
/// rate, then the angle is reduced into `[0, 2π)`. Both reductions are true
/// modulo so pre-epoch (negative) values land in range.
pub fn gmst_rad(jd: f64) -> f64 {
    let angle = gmst_seconds(jd).rem_euclid(DAY_S) * EARTH_ANGVEL;
    let angle = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}
