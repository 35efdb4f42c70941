//! Earth-fixed frame transforms
//!
//! ECEF rotates with the Earth, so an inertial position is carried into it by
//! rotating through `-GMST` about the polar (Z) axis. Only the spin of the
//! Earth is modeled: no polar motion, precession or nutation.

use crate::coordinates::cartesian::Cartesian3;
use crate::time::{julian_centuries_since_j2000, CalendarTime};
use log::{debug, trace};
use nalgebra::{Matrix3, Rotation3, Vector3};

/// Rotate an ECI position into ECEF at the given calendar instant
///
/// # Examples
///
/// ```rust
/// use eci2ecef::coordinates::cartesian::Cartesian3;
/// use eci2ecef::framelib::terrestrial::eci_to_ecef;
/// use eci2ecef::time::CalendarTime;
///
/// let t = CalendarTime::new(2020.0, 1.0, 1.0, 0.0, 0.0, 0.0);
/// let ecef = eci_to_ecef(&t, Cartesian3::new(7000.0, 0.0, 0.0));
/// assert!((ecef.x - -1263.145373652064).abs() < 1e-6);
/// assert!((ecef.y - -6885.089960561255).abs() < 1e-6);
/// assert_eq!(ecef.z, 0.0);
/// ```
pub fn eci_to_ecef(time: &CalendarTime, eci: Cartesian3) -> Cartesian3 {
    let jd = time.julian_date();
    let gmst = time.gmst_rad();
    debug!(
        "{}: jd = {}, T_ut1 = {}, gmst = {} rad",
        time,
        jd,
        julian_centuries_since_j2000(jd),
        gmst
    );

    let ecef = eci_to_ecef_at_angle(gmst, eci);
    trace!("eci {:?} -> ecef {:?}", eci, ecef);
    ecef
}

/// Rotate an ECEF position back into ECI at the given calendar instant
pub fn ecef_to_eci(time: &CalendarTime, ecef: Cartesian3) -> Cartesian3 {
    ecef_to_eci_at_angle(time.gmst_rad(), ecef)
}

/// Rotate an ECI position by `-gmst_rad` about the Z axis
pub fn eci_to_ecef_at_angle(gmst_rad: f64, eci: Cartesian3) -> Cartesian3 {
    let (sin, cos) = gmst_rad.sin_cos();
    Cartesian3::new(
        eci.x * cos + eci.y * sin,
        -eci.x * sin + eci.y * cos,
        eci.z,
    )
}

/// Rotate an ECEF position by `+gmst_rad` about the Z axis
pub fn ecef_to_eci_at_angle(gmst_rad: f64, ecef: Cartesian3) -> Cartesian3 {
    eci_to_ecef_at_angle(-gmst_rad, ecef)
}

/// ECI to ECEF rotation matrix, R_z(-gmst_rad)
pub fn eci_to_ecef_matrix(gmst_rad: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), -gmst_rad).into_inner()
}

impl Cartesian3 {
    /// Treat this vector as an ECI position and rotate it into ECEF
    pub fn to_ecef(&self, time: &CalendarTime) -> Cartesian3 {
        eci_to_ecef(time, *self)
    }

    /// Treat this vector as an ECEF position and rotate it into ECI
    pub fn to_eci(&self, time: &CalendarTime) -> Cartesian3 {
        ecef_to_eci(time, *self)
    }
}
