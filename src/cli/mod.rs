//! Command line argument handling
//!
//! The tool takes nine positional numbers: six calendar components followed by
//! the three ECI components in kilometers. Anything other than nine values is a
//! request for the usage message, not an error. A value that does not parse as
//! a number is an error.

use crate::coordinates::cartesian::Cartesian3;
use crate::framelib::terrestrial::eci_to_ecef;
use crate::time::CalendarTime;
use thiserror::Error;

/// Names of the positional arguments, in order
pub const ARGUMENT_NAMES: [&str; 9] = [
    "year", "month", "day", "hour", "minute", "second", "eci_x_km", "eci_y_km", "eci_z_km",
];

/// Usage line printed when the argument count is wrong
pub const USAGE: &str =
    "Usage: eci_to_ecef year month day hour minute second eci_x_km eci_y_km eci_z_km";

/// Error type for argument parsing
#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("invalid numeric argument for {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// A parsed transform request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    pub time: CalendarTime,
    pub eci: Cartesian3,
}

impl Request {
    /// Run the ECI to ECEF transform for this request
    pub fn transform(&self) -> Cartesian3 {
        eci_to_ecef(&self.time, self.eci)
    }
}

/// What the command line asked for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Invocation {
    /// Wrong number of arguments; print the usage message
    Usage,
    /// Nine numeric arguments
    Transform(Request),
}

/// Parse the positional arguments (program name excluded)
///
/// The count is checked before any value is parsed, so a short list of
/// garbage still yields [`Invocation::Usage`].
///
/// # Examples
///
/// ```rust
/// use eci2ecef::cli::{parse_arguments, Invocation};
///
/// let args = ["2020", "1", "1", "0", "0", "0", "7000", "0", "0"];
/// match parse_arguments(&args).unwrap() {
///     Invocation::Transform(request) => assert_eq!(request.eci.x, 7000.0),
///     Invocation::Usage => unreachable!(),
/// }
///
/// assert_eq!(parse_arguments(&["2020", "1"]).unwrap(), Invocation::Usage);
/// ```
pub fn parse_arguments<S: AsRef<str>>(args: &[S]) -> Result<Invocation, CliError> {
    if args.len() != ARGUMENT_NAMES.len() {
        return Ok(Invocation::Usage);
    }

    let mut values = [0.0; 9];
    for ((slot, arg), name) in values.iter_mut().zip(args).zip(ARGUMENT_NAMES) {
        *slot = parse_number(name, arg.as_ref())?;
    }

    let [year, month, day, hour, minute, second, x, y, z] = values;
    Ok(Invocation::Transform(Request {
        time: CalendarTime::new(year, month, day, hour, minute, second),
        eci: Cartesian3::new(x, y, z),
    }))
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, CliError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}
