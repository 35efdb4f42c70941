//! eci2ecef: Earth-Centered Inertial to Earth-Centered Earth-Fixed transforms
//!
//! This crate rotates position vectors between the inertial (ECI) and
//! Earth-fixed (ECEF) frames using Greenwich Mean Sidereal Time computed from a
//! UTC calendar instant.
//!
//! ```rust
//! use eci2ecef::{eci_to_ecef, CalendarTime, Cartesian3};
//!
//! let t = CalendarTime::new(2000.0, 1.0, 1.0, 12.0, 0.0, 0.0);
//! let ecef = eci_to_ecef(&t, Cartesian3::new(7000.0, 0.0, 0.0));
//! assert!((ecef.magnitude() - 7000.0).abs() < 1e-9);
//! ```

use thiserror::Error;

pub mod cli;
pub mod constants;
pub mod coordinates;
pub mod framelib;
pub mod time;

// Re-export commonly used types
pub use coordinates::Cartesian3;
pub use framelib::{ecef_to_eci, eci_to_ecef};
pub use time::CalendarTime;

/// Main error type for the eci2ecef library
#[derive(Debug, Error)]
pub enum Eci2EcefError {
    #[error(transparent)]
    ArgumentError(#[from] cli::CliError),

    #[error("Time error: {0}")]
    TimeError(#[from] time::TimeError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for eci2ecef operations
pub type Result<T> = std::result::Result<T, Eci2EcefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_convert() {
        let err: Eci2EcefError = cli::CliError::InvalidNumber {
            name: "year",
            value: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "invalid numeric argument for year: \"x\"");

        let err: Eci2EcefError = CalendarTime::new(2021.0, 2.0, 30.0, 0.0, 0.0, 0.0)
            .to_datetime()
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Time error: Time out of range"));
    }
}
