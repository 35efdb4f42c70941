//! Constants module for Earth rotation calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Earth constants
/// Earth's angular velocity in radians/s
pub const EARTH_ANGVEL: f64 = 7.292_115_0e-5;
/// WGS-84 equatorial radius in kilometers
///
/// Not used by the spherical-Earth rotation; kept for an oblate-Earth
/// correction.
pub const R_E_KM: f64 = 6_378.137;
/// WGS-84 first eccentricity
///
/// Not used by the spherical-Earth rotation; kept for an oblate-Earth
/// correction.
pub const E_E: f64 = 0.081_819_221_456;

// IAU 1982 GMST polynomial, in seconds of time against Julian centuries of UT1
/// GMST at J2000.0 in seconds
pub const GMST_C0_S: f64 = 67_310.548_41;
/// Linear GMST rate in seconds per Julian century (876600 h plus 8640184.812866 s)
pub const GMST_C1_S: f64 = 876_600.0 * 3_600.0 + 8_640_184.812_866;
/// Quadratic GMST coefficient in seconds per century squared
pub const GMST_C2_S: f64 = 0.093_104;
/// Cubic GMST coefficient in seconds per century cubed
pub const GMST_C3_S: f64 = -6.2e-6;
