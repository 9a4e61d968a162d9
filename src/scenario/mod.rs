//! Scenario configuration
//!
//! A scenario bundles the bodies of a session with the alert threshold and
//! an optional analysis window. Scenarios are plain JSON:
//!
//! ```json
//! {
//!   "bodies": [
//!     { "name": "Sat-A", "radius": 4.0, "angular_velocity": 0.8 },
//!     { "name": "Sat-B", "radius": 6.0, "angular_velocity": 0.6, "phase": 1.2 },
//!     { "name": "Sat-P", "radius": 7.0, "angular_velocity": 0.3, "inclination_deg": 90.0 }
//!   ],
//!   "threshold": 0.8,
//!   "window": { "start": 0.0, "end": 20.0, "samples": 201 }
//! }
//! ```
//!
//! Every body goes through the same validation as [`OrbitingBody::new`].
//! Names are expected to be unique and orbits to clear the central body,
//! but neither is enforced; both are logged as warnings.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::body::OrbitingBody;
use crate::conjunction::sweep::{sweep_separations, SeparationSweep};
use crate::conjunction::{check_close_approaches, ConjunctionAlert};
use crate::constants::{CENTRAL_BODY_RADIUS, DEFAULT_ALERT_THRESHOLD};
use crate::time::TimeWindow;
use crate::{OrbitError, Result};

pub mod synthetic;

pub use synthetic::SyntheticConstellationConfig;

fn default_threshold() -> f64 {
    DEFAULT_ALERT_THRESHOLD
}

/// Bodies plus analysis settings for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub bodies: Vec<OrbitingBody>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<TimeWindow>,
}

impl Scenario {
    /// Creates a scenario with the default threshold and no window
    pub fn new(bodies: Vec<OrbitingBody>) -> Self {
        Self {
            bodies,
            threshold: DEFAULT_ALERT_THRESHOLD,
            window: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// The three-satellite animation preset
    ///
    /// Sat-A, Sat-B and Sat-C on radii 4, 6, 8 with phases 0, 1.2, 2.0 and
    /// a close-approach threshold of 0.8.
    pub fn default_constellation() -> Result<Self> {
        let bodies = vec![
            OrbitingBody::new("Sat-A", 4.0, 0.8)?,
            OrbitingBody::new("Sat-B", 6.0, 0.6)?.with_phase(1.2)?,
            OrbitingBody::new("Sat-C", 8.0, 0.4)?.with_phase(2.0)?,
        ];
        Ok(Self::new(bodies).with_threshold(DEFAULT_ALERT_THRESHOLD))
    }

    /// Parses and validates a scenario from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Loads and validates a scenario from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let scenario = Self::from_json_str(&text)?;
        info!(
            "Loaded scenario from {} with {} bodies",
            path.display(),
            scenario.bodies.len()
        );
        Ok(scenario)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the scenario as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Checks settings that deserialization alone cannot enforce
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(OrbitError::Config(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        if let Some(window) = &self.window {
            window.validate()?;
        }

        let mut seen = HashSet::new();
        for body in &self.bodies {
            if !seen.insert(body.name()) {
                warn!("Duplicate body name {:?} in scenario", body.name());
            }
            if body.radius() <= CENTRAL_BODY_RADIUS {
                warn!(
                    "Body {:?} orbits at radius {}, inside the central body",
                    body.name(),
                    body.radius()
                );
            }
        }
        Ok(())
    }

    /// Looks up a body by name (first match)
    pub fn body(&self, name: &str) -> Option<&OrbitingBody> {
        self.bodies.iter().find(|body| body.name() == name)
    }

    /// Close approaches at time `t` using the scenario threshold
    pub fn alerts_at(&self, t: f64) -> Vec<ConjunctionAlert> {
        check_close_approaches(&self.bodies, t, self.threshold)
    }

    /// Separation sweep over the scenario window
    ///
    /// Fails with `OrbitError::Config` if the scenario has no window.
    pub fn sweep(&self) -> Result<SeparationSweep> {
        let window = self
            .window
            .ok_or_else(|| OrbitError::Config("scenario has no time window".to_string()))?;
        window.validate()?;
        Ok(sweep_separations(&self.bodies, &window.times()))
    }
}
