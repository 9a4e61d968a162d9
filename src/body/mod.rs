//! Orbiting body model
//!
//! An [`OrbitingBody`] moves on a circle of fixed radius around the central
//! body. The circle lies in the equatorial (x–y) plane and is optionally
//! tilted about the x-axis by a fixed inclination:
//!
//! ```text
//! theta  = w·t + phase
//! flat   = (r·cos theta, r·sin theta)
//! x      = flat.x
//! y      = flat.y · cos(inc)
//! z      = flat.y · sin(inc)
//! ```
//!
//! With zero inclination this reduces exactly to the planar model, so a
//! single type covers both the 2D and the 3D variant.

use std::f64::consts::TAU;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::coordinates::{Angle, Cartesian3, GroundPoint};
use crate::time::{linspace, TimeWindow};
use crate::{OrbitError, Result};

mod trail;

pub use trail::OrbitTrail;

/// Immutable orbital configuration of one body
///
/// Two calls to [`OrbitingBody::position`] with the same `t` always return
/// the same value; the body carries no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyConfig", into = "BodyConfig")]
pub struct OrbitingBody {
    name: String,
    radius: f64,
    angular_velocity: f64,
    inclination: Angle,
    phase: f64,
}

/// Plain serialized form of an [`OrbitingBody`]
///
/// Deserializing a body goes through [`OrbitingBody::try_from`], so
/// configuration files get the same validation as the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub radius: f64,
    pub angular_velocity: f64,
    #[serde(default)]
    pub inclination_deg: f64,
    #[serde(default)]
    pub phase: f64,
}

impl OrbitingBody {
    /// Creates a body on a flat orbit with zero phase
    ///
    /// # Arguments
    /// * `name` - Label used in alerts and reports
    /// * `radius` - Orbit radius, same length unit as every distance
    /// * `angular_velocity` - Radians per unit time; negative runs clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use orbitwatch::OrbitingBody;
    ///
    /// let sat = OrbitingBody::new("Sat-A", 4.0, 0.8)?
    ///     .with_inclination_degrees(51.6)?
    ///     .with_phase(1.2)?;
    /// assert_eq!(sat.radius(), 4.0);
    /// assert!((sat.position(3.0).magnitude() - 4.0).abs() < 1e-12);
    /// # Ok::<(), orbitwatch::OrbitError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// `OrbitError::InvalidParameter` when `radius` is not a positive finite
    /// number or `angular_velocity` is zero or not finite.
    pub fn new(name: &str, radius: f64, angular_velocity: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            debug!("rejecting body {:?}: radius {}", name, radius);
            return Err(OrbitError::InvalidParameter(format!(
                "radius of {:?} must be positive and finite, got {}",
                name, radius
            )));
        }
        if !angular_velocity.is_finite() || angular_velocity == 0.0 {
            debug!(
                "rejecting body {:?}: angular velocity {}",
                name, angular_velocity
            );
            return Err(OrbitError::InvalidParameter(format!(
                "angular velocity of {:?} must be nonzero and finite, got {}",
                name, angular_velocity
            )));
        }

        Ok(Self {
            name: name.to_string(),
            radius,
            angular_velocity,
            inclination: Angle::from_degrees(0.0),
            phase: 0.0,
        })
    }

    /// Returns a copy tilted by `degrees` about the x-axis
    pub fn with_inclination_degrees(self, degrees: f64) -> Result<Self> {
        self.with_inclination(Angle::from_degrees(degrees))
    }

    /// Returns a copy tilted by `inclination` about the x-axis
    pub fn with_inclination(mut self, inclination: Angle) -> Result<Self> {
        if !inclination.is_finite() {
            return Err(OrbitError::InvalidParameter(format!(
                "inclination of {:?} must be finite",
                self.name
            )));
        }
        self.inclination = inclination;
        Ok(self)
    }

    /// Returns a copy with angular offset `phase` (radians) at `t = 0`
    pub fn with_phase(mut self, phase: f64) -> Result<Self> {
        if !phase.is_finite() {
            return Err(OrbitError::InvalidParameter(format!(
                "phase of {:?} must be finite, got {}",
                self.name, phase
            )));
        }
        self.phase = phase;
        Ok(self)
    }

    /// Label used in alerts and reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Orbit radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radians per unit time; the sign gives the direction of travel
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Tilt of the orbital plane about the x-axis
    pub fn inclination(&self) -> Angle {
        self.inclination
    }

    /// Angular offset at `t = 0`, radians
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Time for one full revolution, `2π / |w|`
    ///
    /// Rendering layers sweep `t` over this span to draw a closed trail.
    pub fn period(&self) -> f64 {
        TAU / self.angular_velocity.abs()
    }

    /// Linear speed along the orbit, `r·|w|`
    pub fn orbital_speed(&self) -> f64 {
        self.radius * self.angular_velocity.abs()
    }

    /// Orbital angle `w·t + phase` in radians, not wrapped
    pub fn angle_at(&self, t: f64) -> f64 {
        self.angular_velocity * t + self.phase
    }

    /// Position in the body's own orbital plane, before any tilt
    ///
    /// This is the planar model's `(x, y)`.
    pub fn orbital_plane_position(&self, t: f64) -> (f64, f64) {
        let (sin, cos) = self.angle_at(t).sin_cos();
        (self.radius * cos, self.radius * sin)
    }

    /// Position relative to the central body at time `t`
    ///
    /// `|position(t)| == radius` for every `t` up to rounding.
    pub fn position(&self, t: f64) -> Cartesian3 {
        let (x, y) = self.orbital_plane_position(t);
        Cartesian3::planar(x, y).rotated_about_x(self.inclination)
    }

    /// Latitude/longitude of the body at time `t`
    ///
    /// # Errors
    ///
    /// `OrbitError::DegenerateGeometry` if the position has zero length,
    /// which only a zero-radius orbit could produce.
    pub fn lat_lon(&self, t: f64) -> Result<GroundPoint> {
        GroundPoint::from_cartesian(&self.position(t))
    }

    /// Ground track sampled over `window`
    pub fn ground_track(&self, window: &TimeWindow) -> Result<Vec<GroundPoint>> {
        window.validate()?;
        window.times().into_iter().map(|t| self.lat_lon(t)).collect()
    }

    /// One closed loop of positions starting at `start`
    ///
    /// Samples span exactly one period, so the first and last points
    /// coincide.
    pub fn trail(&self, start: f64, samples: usize) -> Result<OrbitTrail> {
        if samples < 2 {
            return Err(OrbitError::InvalidParameter(format!(
                "a trail needs at least 2 samples, got {}",
                samples
            )));
        }
        if !start.is_finite() {
            return Err(OrbitError::InvalidParameter(format!(
                "trail start must be finite, got {}",
                start
            )));
        }

        let times = linspace(start, start + self.period(), samples);
        let points = times.iter().map(|&t| self.position(t)).collect();
        Ok(OrbitTrail::new(&self.name, times, points))
    }
}

impl TryFrom<BodyConfig> for OrbitingBody {
    type Error = OrbitError;

    fn try_from(config: BodyConfig) -> Result<Self> {
        OrbitingBody::new(&config.name, config.radius, config.angular_velocity)?
            .with_inclination_degrees(config.inclination_deg)?
            .with_phase(config.phase)
    }
}

impl From<OrbitingBody> for BodyConfig {
    fn from(body: OrbitingBody) -> Self {
        BodyConfig {
            inclination_deg: body.inclination.to_degrees(),
            name: body.name,
            radius: body.radius,
            angular_velocity: body.angular_velocity,
            phase: body.phase,
        }
    }
}
