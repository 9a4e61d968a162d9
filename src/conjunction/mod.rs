//! Close-approach (conjunction) detection
//!
//! For a snapshot time `t`, every unordered pair `(i, j)` with `i < j` in
//! the caller's body sequence is checked and reported when its separation
//! is strictly below the threshold. Alerts come out in ascending `(i, j)`
//! order, which keeps on-screen listings and test output stable.
//!
//! The pair count is `n·(n-1)/2` per time sample. That is fine for tens of
//! bodies; larger constellations would want a spatial partition over the
//! current positions before pairing.

use serde::Serialize;

use crate::body::OrbitingBody;
use crate::coordinates::{distance, Cartesian3};

pub mod sweep;

/// A pair of bodies found closer than the alert threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConjunctionAlert {
    /// Name of the body that comes first in the input sequence
    pub body_a: String,
    /// Name of the body that comes second in the input sequence
    pub body_b: String,
    /// Separation at the evaluated time
    pub distance: f64,
}

impl ConjunctionAlert {
    /// True if `name` is one of the two bodies in this alert
    pub fn involves(&self, name: &str) -> bool {
        self.body_a == name || self.body_b == name
    }
}

/// Separation of two bodies at time `t`
pub fn pair_distance(a: &OrbitingBody, b: &OrbitingBody, t: f64) -> f64 {
    distance(&a.position(t), &b.position(t))
}

/// All pairs closer than `threshold` at time `t`
///
/// Empty and single-body inputs yield no alerts, as does any threshold
/// `<= 0`. A pair exactly at `threshold` is not reported.
///
/// # Examples
///
/// ```
/// use orbitwatch::{check_close_approaches, OrbitingBody};
///
/// let bodies = vec![
///     OrbitingBody::new("inner", 3.0, 1.0)?,
///     OrbitingBody::new("outer", 5.0, 1.0)?,
/// ];
/// assert_eq!(check_close_approaches(&bodies, 0.0, 2.5).len(), 1);
/// assert!(check_close_approaches(&bodies, 0.0, 2.0).is_empty());
/// # Ok::<(), orbitwatch::OrbitError>(())
/// ```
pub fn check_close_approaches(
    bodies: &[OrbitingBody],
    t: f64,
    threshold: f64,
) -> Vec<ConjunctionAlert> {
    let positions: Vec<Cartesian3> = bodies.iter().map(|body| body.position(t)).collect();
    alerts_from_positions(bodies, &positions, threshold)
}

/// Pairs the precomputed `positions` (one per body, same order)
pub(crate) fn alerts_from_positions(
    bodies: &[OrbitingBody],
    positions: &[Cartesian3],
    threshold: f64,
) -> Vec<ConjunctionAlert> {
    let mut alerts = Vec::new();

    for (i, body_a) in bodies.iter().enumerate() {
        for (j, body_b) in bodies.iter().enumerate().skip(i + 1) {
            let d = distance(&positions[i], &positions[j]);
            if d < threshold {
                alerts.push(ConjunctionAlert {
                    body_a: body_a.name().to_string(),
                    body_b: body_b.name().to_string(),
                    distance: d,
                });
            }
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn constellation() -> Vec<OrbitingBody> {
        vec![
            OrbitingBody::new("Sat-A", 4.0, 0.8).unwrap(),
            OrbitingBody::new("Sat-B", 6.0, 0.6)
                .unwrap()
                .with_phase(1.2)
                .unwrap(),
            OrbitingBody::new("Sat-C", 8.0, 0.4)
                .unwrap()
                .with_phase(2.0)
                .unwrap(),
        ]
    }

    #[test]
    fn test_empty_and_single_inputs() {
        assert!(check_close_approaches(&[], 0.0, 10.0).is_empty());
        let one = vec![OrbitingBody::new("solo", 4.0, 1.0).unwrap()];
        assert!(check_close_approaches(&one, 0.0, 100.0).is_empty());
    }

    #[test]
    fn test_non_positive_threshold_yields_nothing() {
        let bodies = constellation();
        assert!(check_close_approaches(&bodies, 6.0, 0.0).is_empty());
        assert!(check_close_approaches(&bodies, 6.0, -1.0).is_empty());
    }

    #[test]
    fn test_no_alert_at_epoch() {
        let bodies = constellation();
        assert!(check_close_approaches(&bodies, 0.0, 0.8).is_empty());
    }

    #[test]
    fn test_aligned_pair_is_alerted() {
        let bodies = constellation();
        let alerts = check_close_approaches(&bodies, 6.0, 2.5);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].body_a, "Sat-A");
        assert_eq!(alerts[0].body_b, "Sat-B");
        assert_relative_eq!(alerts[0].distance, 2.0, epsilon = 1e-12);
        assert!(alerts[0].involves("Sat-B"));
        assert!(!alerts[0].involves("Sat-C"));
    }

    #[test]
    fn test_alert_order_follows_input_order() {
        // Three bodies on the same ray: every pair is within 10
        let bodies = vec![
            OrbitingBody::new("outer", 9.0, 1.0).unwrap(),
            OrbitingBody::new("inner", 3.0, 1.0).unwrap(),
            OrbitingBody::new("middle", 5.0, 1.0).unwrap(),
        ];
        let alerts = check_close_approaches(&bodies, 0.4, 10.0);
        let pairs: Vec<(&str, &str)> = alerts
            .iter()
            .map(|a| (a.body_a.as_str(), a.body_b.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("outer", "inner"), ("outer", "middle"), ("inner", "middle")]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let bodies = vec![
            OrbitingBody::new("a", 3.0, 1.0).unwrap(),
            OrbitingBody::new("b", 5.0, 1.0).unwrap(),
        ];
        let d = pair_distance(&bodies[0], &bodies[1], 0.0);
        assert_eq!(d, 2.0);
        assert!(check_close_approaches(&bodies, 0.0, d).is_empty());
        assert_eq!(check_close_approaches(&bodies, 0.0, d + 1e-9).len(), 1);
    }

    #[test]
    fn test_pair_distance_symmetry() {
        let bodies = constellation();
        for t in [0.0, 1.5, 6.0, 17.3] {
            assert_eq!(
                pair_distance(&bodies[0], &bodies[2], t),
                pair_distance(&bodies[2], &bodies[0], t)
            );
        }
    }

    #[test]
    fn test_inclined_bodies_separate_out_of_plane() {
        // Same radius and angle, different tilts: apart except on the node line
        let flat = OrbitingBody::new("flat", 6.0, 1.0).unwrap();
        let tilted = OrbitingBody::new("tilted", 6.0, 1.0)
            .unwrap()
            .with_inclination_degrees(90.0)
            .unwrap();
        let bodies = vec![flat, tilted];

        assert_eq!(check_close_approaches(&bodies, 0.0, 0.1).len(), 1);
        let quarter = std::f64::consts::FRAC_PI_2;
        let alerts = check_close_approaches(&bodies, quarter, 8.0);
        assert!(alerts.is_empty(), "expected ~8.49 separation, got {:?}", alerts);
    }
}
