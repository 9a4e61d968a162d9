//! # Cartesian Position Module
//!
//! Positions of orbiting bodies are expressed in a right-handed frame
//! centred on the central body:
//! - **X-axis**: reference direction, orbital angle 0
//! - **Y-axis**: orbital angle 90° in the equatorial plane
//! - **Z-axis**: toward the north pole of the central body
//!
//! Flat (non-inclined) orbits live in the x–y plane with `z = 0`, so one
//! type serves both the planar and the inclined model.
//!
//! ## Examples
//!
//! ```rust
//! use orbitwatch::coordinates::cartesian::{distance, Cartesian3};
//!
//! let a = Cartesian3::new(4.0, 0.0, 0.0);
//! let b = Cartesian3::new(0.0, 3.0, 0.0);
//! assert_eq!(distance(&a, &b), 5.0);
//! ```

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use super::angle::Angle;

/// Three-dimensional position relative to the central body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new position
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Creates a position in the equatorial plane
    pub fn planar(x: f64, y: f64) -> Self {
        Cartesian3 { x, y, z: 0.0 }
    }

    /// The origin, i.e. the centre of the central body
    pub fn origin() -> Self {
        Cartesian3::new(0.0, 0.0, 0.0)
    }

    /// Euclidean length of the position vector
    ///
    /// `magnitude = sqrt(x² + y² + z²)`, evaluated with `hypot` so the
    /// squares cannot overflow or underflow for very large or very small
    /// components.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Straight-line distance to another position
    pub fn distance_to(&self, other: &Cartesian3) -> f64 {
        (*self - *other).magnitude()
    }

    /// Projection onto the equatorial plane as an `(x, y)` pair
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Rotates this position about the x-axis by `angle`
    ///
    /// The x component is untouched; `(y, z)` turn counter-clockwise when
    /// viewed from +x. A zero angle is an exact identity.
    pub fn rotated_about_x(&self, angle: Angle) -> Cartesian3 {
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), angle.to_radians());
        Cartesian3::from_vector3(rotation * self.to_vector3())
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
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
}

/// Euclidean separation between two positions
///
/// Every conjunction path (instantaneous alerts and swept trends) goes
/// through this function so both report bit-identical distances.
pub fn distance(p1: &Cartesian3, p2: &Cartesian3) -> f64 {
    p1.distance_to(p2)
}

// Arithmetic operations for convenience
impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

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

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}
