use serde::Serialize;

use crate::coordinates::Cartesian3;

/// Positions of one body sampled over a full orbital period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitTrail {
    body: String,
    times: Vec<f64>,
    points: Vec<Cartesian3>,
}

impl OrbitTrail {
    pub(crate) fn new(body: &str, times: Vec<f64>, points: Vec<Cartesian3>) -> Self {
        debug_assert_eq!(times.len(), points.len());
        Self {
            body: body.to_string(),
            times,
            points,
        }
    }

    /// Name of the body this trail belongs to
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Sample times, one per point
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn points(&self) -> &[Cartesian3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time covered from first to last sample
    pub fn span(&self) -> f64 {
        match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// `(x, y)` pairs for drawing the trail on a flat plot
    pub fn planar_points(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(Cartesian3::xy).collect()
    }
}
