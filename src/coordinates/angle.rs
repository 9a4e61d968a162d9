//! # Angle Representation Module
//!
//! Orbital parameters arrive in mixed units: inclination is configured in
//! degrees while phase and orbital angles are radians. `Angle` keeps the
//! value in whichever unit it was supplied and converts only on request,
//! so an inclination of exactly `0.0` degrees stays exactly zero radians.
//!
//! ## Examples
//!
//! ```rust
//! use orbitwatch::coordinates::angle::Angle;
//!
//! let inclination = Angle::from_degrees(90.0);
//! assert_eq!(inclination.to_degrees(), 90.0);
//! assert!((inclination.to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```

use std::f64::consts::PI;

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement stored in its original unit
///
/// Equality compares the stored representation, so `90°` and `π/2 rad`
/// are not equal even though they describe the same direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in degrees
    ///
    /// Exact when the angle was constructed from degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * (180.0 / PI),
        }
    }

    /// Returns the angle value in radians
    ///
    /// Exact when the angle was constructed from radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * (PI / 180.0),
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// True when the stored value is a finite number
    pub fn is_finite(&self) -> bool {
        match self.angle {
            AngleFormat::Degrees(v) | AngleFormat::Radians(v) => v.is_finite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_angle_from_degrees_exact_storage() {
        let angle = Angle::from_degrees(45.0);
        assert_eq!(angle.to_degrees(), 45.0);

        match angle.angle {
            AngleFormat::Degrees(val) => assert_eq!(val, 45.0),
            AngleFormat::Radians(_) => panic!("Expected degrees format"),
        }
    }

    #[test]
    fn test_zero_inclination_is_exact() {
        let inclination = Angle::from_degrees(0.0);
        assert_eq!(inclination.to_radians(), 0.0);
    }

    #[test]
    fn test_common_angles_degrees() {
        let test_cases = vec![
            (0.0, 0.0),
            (90.0, PI / 2.0),
            (180.0, PI),
            (360.0, 2.0 * PI),
            (-45.0, -PI / 4.0),
        ];

        for (degrees, expected_radians) in test_cases {
            let angle = Angle::from_degrees(degrees);
            assert!(
                (angle.to_radians() - expected_radians).abs() < 1e-14,
                "Failed for {} degrees",
                degrees
            );
        }
    }

    #[test]
    fn test_radians_round_trip() {
        let phase = Angle::from_radians(1.2);
        assert_eq!(phase.to_radians(), 1.2);
        let back = Angle::from_degrees(phase.to_degrees());
        assert!((back.to_radians() - 1.2).abs() < 1e-14);
    }

    #[test]
    fn test_non_finite_detection() {
        assert!(Angle::from_degrees(30.0).is_finite());
        assert!(!Angle::from_degrees(f64::NAN).is_finite());
        assert!(!Angle::from_radians(f64::INFINITY).is_finite());
    }

    #[test]
    fn test_angle_equality_is_representational() {
        assert_eq!(Angle::from_degrees(90.0), Angle::from_degrees(90.0));
        assert_ne!(Angle::from_degrees(90.0), Angle::from_radians(PI / 2.0));
    }
}
