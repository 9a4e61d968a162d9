//! Synthetic constellation generator
//!
//! Produces reproducible random constellations for demos, benchmarks and
//! stress tests. Bodies are named `Sat-1 .. Sat-n`; radius and angular
//! velocity default to the ranges offered by the interactive controls.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;

use super::Scenario;
use crate::body::OrbitingBody;
use crate::constants::{SYNTHETIC_ANGULAR_VELOCITY_RANGE, SYNTHETIC_RADIUS_RANGE};
use crate::{OrbitError, Result};

/// Configuration for synthetic constellation generation
#[derive(Debug, Clone)]
pub struct SyntheticConstellationConfig {
    /// Number of bodies to generate
    pub count: usize,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Orbital radius range `[min, max)`
    pub radius_range: (f64, f64),
    /// Angular velocity range `[min, max)`
    pub angular_velocity_range: (f64, f64),
    /// Inclination range in degrees; `None` keeps every orbit flat
    pub inclination_range_deg: Option<(f64, f64)>,
    /// Draw a random phase in `[0, 2π)` instead of zero
    pub random_phase: bool,
}

impl Default for SyntheticConstellationConfig {
    fn default() -> Self {
        Self {
            count: 3,
            seed: 42,
            radius_range: SYNTHETIC_RADIUS_RANGE,
            angular_velocity_range: SYNTHETIC_ANGULAR_VELOCITY_RANGE,
            inclination_range_deg: None,
            random_phase: false,
        }
    }
}

impl SyntheticConstellationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bodies to generate
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_radius_range(mut self, min: f64, max: f64) -> Self {
        self.radius_range = (min, max);
        self
    }

    pub fn with_angular_velocity_range(mut self, min: f64, max: f64) -> Self {
        self.angular_velocity_range = (min, max);
        self
    }

    /// Tilt each orbit by a random inclination in `[min, max)` degrees
    pub fn with_inclination_range(mut self, min_deg: f64, max_deg: f64) -> Self {
        self.inclination_range_deg = Some((min_deg, max_deg));
        self
    }

    pub fn with_random_phase(mut self, random_phase: bool) -> Self {
        self.random_phase = random_phase;
        self
    }

    /// Generate the bodies described by this configuration
    pub fn generate(&self) -> Result<Vec<OrbitingBody>> {
        let radius_dist = uniform("radius", self.radius_range)?;
        let velocity_dist = uniform("angular velocity", self.angular_velocity_range)?;
        let inclination_dist = self
            .inclination_range_deg
            .map(|range| uniform("inclination", range))
            .transpose()?;
        let phase_dist = Uniform::from(0.0..TAU);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut bodies = Vec::with_capacity(self.count);

        for i in 1..=self.count {
            let radius = radius_dist.sample(&mut rng);
            let angular_velocity = velocity_dist.sample(&mut rng);
            let mut body = OrbitingBody::new(&format!("Sat-{}", i), radius, angular_velocity)?;

            if let Some(dist) = &inclination_dist {
                body = body.with_inclination_degrees(dist.sample(&mut rng))?;
            }
            if self.random_phase {
                body = body.with_phase(phase_dist.sample(&mut rng))?;
            }
            bodies.push(body);
        }

        Ok(bodies)
    }

    /// Generate the bodies wrapped in a default-threshold scenario
    pub fn generate_scenario(&self) -> Result<Scenario> {
        Ok(Scenario::new(self.generate()?))
    }
}

fn uniform(what: &str, (min, max): (f64, f64)) -> Result<Uniform<f64>> {
    if !(min.is_finite() && max.is_finite() && min < max) {
        return Err(OrbitError::InvalidParameter(format!(
            "{} range must be finite with min < max, got [{}, {})",
            what, min, max
        )));
    }
    Ok(Uniform::from(min..max))
}
