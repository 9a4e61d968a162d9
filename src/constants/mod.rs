//! Shared numeric defaults
//!
//! Distances and times are abstract scalars; the values below mirror the
//! scale of the default constellation (central body radius 1, orbits 2..10).

/// Radius of the central body drawn at the origin
pub const CENTRAL_BODY_RADIUS: f64 = 1.0;

/// Separation below which two bodies are reported as a close approach
pub const DEFAULT_ALERT_THRESHOLD: f64 = 0.8;

/// Time advanced per animation frame
pub const DEFAULT_TIME_STEP: f64 = 0.05;

/// Number of samples used to draw one closed orbit trail
pub const DEFAULT_TRAIL_SAMPLES: usize = 200;

/// Radius range offered for synthetic constellations
pub const SYNTHETIC_RADIUS_RANGE: (f64, f64) = (2.0, 10.0);

/// Angular velocity range offered for synthetic constellations (rad per unit time)
pub const SYNTHETIC_ANGULAR_VELOCITY_RANGE: (f64, f64) = (0.1, 2.0);
