//! Reference frame transforms

pub mod terrestrial;

pub use terrestrial::{ecef_to_eci, eci_to_ecef, eci_to_ecef_at_angle, eci_to_ecef_matrix};
