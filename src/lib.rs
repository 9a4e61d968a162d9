//! Orbitwatch: idealized orbit kinematics and close-approach detection
//!
//! This crate computes time-parameterized positions of bodies on circular
//! (optionally inclined) orbits around a central body, and flags pairs of
//! bodies whose separation drops below a threshold.
//!
//! Everything here is a pure function of immutable body parameters and a
//! time value. Callers own the collection of bodies and pass it in per query.
//!
//! ```rust
//! use orbitwatch::{check_close_approaches, OrbitingBody};
//!
//! let bodies = vec![
//!     OrbitingBody::new("Sat-A", 4.0, 0.8).unwrap(),
//!     OrbitingBody::new("Sat-B", 6.0, 0.6).unwrap().with_phase(1.2).unwrap(),
//! ];
//!
//! // Both bodies share the same orbital angle at t = 6.0
//! let alerts = check_close_approaches(&bodies, 6.0, 2.5);
//! assert_eq!(alerts.len(), 1);
//! assert_eq!(alerts[0].body_a, "Sat-A");
//! ```

use thiserror::Error;

pub mod body;
pub mod conjunction;
pub mod constants;
pub mod coordinates;
pub mod scenario;
pub mod time;

// Re-export commonly used types
pub use body::{OrbitTrail, OrbitingBody};
pub use conjunction::sweep::{sweep_separations, PairSeparation, SeparationSweep};
pub use conjunction::{check_close_approaches, pair_distance, ConjunctionAlert};
pub use coordinates::cartesian::{distance, Cartesian3};
pub use coordinates::geographic::GroundPoint;
pub use scenario::Scenario;
pub use time::TimeWindow;

/// Main error type for the orbitwatch library
#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for OrbitError {
    fn from(err: serde_json::Error) -> Self {
        OrbitError::Config(err.to_string())
    }
}

/// Result type for orbitwatch operations
pub type Result<T> = std::result::Result<T, OrbitError>;
