//! Latitude/longitude projection of body positions
//!
//! A ground point is the direction of a position vector expressed as
//! geographic-style coordinates on a sphere around the central body:
//! - `lat = asin(z / |p|)` in degrees, range `[-90, 90]`
//! - `lon = atan2(y, x)` in degrees, range `(-180, 180]`
//!
//! The central body does not rotate in this model, so longitudes are
//! measured in the inertial frame.

use serde::{Deserialize, Serialize};

use super::cartesian::Cartesian3;
use crate::{OrbitError, Result};

/// A point of a ground track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundPoint {
    /// Latitude in degrees
    pub lat_deg: f64,
    /// Longitude in degrees
    pub lon_deg: f64,
}

impl GroundPoint {
    /// Projects a position vector onto latitude/longitude
    ///
    /// A zero-length vector has no direction, so this fails with
    /// `OrbitError::DegenerateGeometry` instead of producing NaN.
    pub fn from_cartesian(position: &Cartesian3) -> Result<Self> {
        let norm = position.magnitude();
        if norm == 0.0 || !norm.is_finite() {
            return Err(OrbitError::DegenerateGeometry(format!(
                "cannot project position ({}, {}, {}) with length {} onto latitude/longitude",
                position.x, position.y, position.z, norm
            )));
        }

        // Clamp guards asin against |z| / norm rounding just above 1
        let sin_lat = (position.z / norm).clamp(-1.0, 1.0);
        Ok(Self {
            lat_deg: sin_lat.asin().to_degrees(),
            lon_deg: position.y.atan2(position.x).to_degrees(),
        })
    }
}
