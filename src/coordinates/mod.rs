//! Coordinate types shared by the body model and the conjunction analyzer

pub mod angle;
pub mod cartesian;
pub mod geographic;

pub use angle::Angle;
pub use cartesian::{distance, Cartesian3};
pub use geographic::GroundPoint;
