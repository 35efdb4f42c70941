//! # Cartesian Position Vectors
//!
//! A plain (x, y, z) triple in kilometers, used for positions in both the
//! Earth-Centered Inertial (ECI) and Earth-Centered Earth-Fixed (ECEF) frames.
//! The frame a value belongs to is decided by the caller; the type carries no
//! frame tag.
//!
//! ## Axis Convention
//!
//! Both frames share the origin at the Earth's center and the Z-axis along the
//! polar axis:
//! - **ECI X**: toward the vernal equinox
//! - **ECEF X**: toward the Greenwich meridian on the equator
//! - **Z**: toward the north pole in both frames
//!
//! ## Examples
//!
//! ```rust
//! use eci2ecef::coordinates::cartesian::Cartesian3;
//!
//! let leo = Cartesian3::new(7000.0, 0.0, 0.0);
//! assert_eq!(leo.magnitude(), 7000.0);
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-dimensional Cartesian position in kilometers
///
/// Immutable value type: every operation returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component in km
    pub x: f64,
    /// Y-component in km
    pub y: f64,
    /// Z-component in km (polar axis)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian position
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eci2ecef::coordinates::cartesian::Cartesian3;
    ///
    /// let eci = Cartesian3::new(7000.0, -1200.5, 300.0);
    /// assert_eq!(eci.x, 7000.0);
    /// assert_eq!(eci.y, -1200.5);
    /// assert_eq!(eci.z, 300.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Euclidean length of the vector
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Length of the projection onto the equatorial (XY) plane
    ///
    /// Rotations about the polar axis leave this unchanged.
    pub fn equatorial_magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eci2ecef::coordinates::cartesian::Cartesian3;
    /// use nalgebra::Vector3;
    ///
    /// let coord = Cartesian3::new(1.0, 2.0, 3.0);
    /// let vec: Vector3<f64> = coord.to_vector3();
    /// assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }

    /// Components as an array in (x, y, z) order
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Cartesian3::new(x, y, z)
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

impl From<Cartesian3> for Vector3<f64> {
    fn from(coord: Cartesian3) -> Self {
        coord.to_vector3()
    }
}

/// One component per line, x then y then z
impl fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.x)?;
        writeln!(f, "{:?}", self.y)?;
        write!(f, "{:?}", self.z)
    }
}

// Difference of two positions, used for round-trip error
impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
