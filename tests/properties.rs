//! Property-based tests for the body model and conjunction analyzer
//!
//! These check geometric invariants over a wide range of orbital parameters.

use orbitwatch::{check_close_approaches, distance, Cartesian3, OrbitingBody};
use proptest::prelude::*;

fn body_strategy() -> impl Strategy<Value = OrbitingBody> {
    (
        0.5f64..50.0,
        prop_oneof![-3.0f64..-0.05, 0.05f64..3.0],
        -180.0f64..180.0,
        -10.0f64..10.0,
    )
        .prop_map(|(radius, w, inclination, phase)| {
            OrbitingBody::new("prop", radius, w)
                .unwrap()
                .with_inclination_degrees(inclination)
                .unwrap()
                .with_phase(phase)
                .unwrap()
        })
}

fn constellation_strategy() -> impl Strategy<Value = Vec<OrbitingBody>> {
    prop::collection::vec(body_strategy(), 0..8).prop_map(|bodies| {
        bodies
            .into_iter()
            .enumerate()
            .map(|(i, b)| {
                OrbitingBody::new(&format!("Sat-{}", i + 1), b.radius(), b.angular_velocity())
                    .unwrap()
                    .with_inclination(b.inclination())
                    .unwrap()
                    .with_phase(b.phase())
                    .unwrap()
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The distance from the central body never changes, whatever the tilt.
    #[test]
    fn prop_norm_equals_radius(body in body_strategy(), t in -1.0e3f64..1.0e3) {
        let r = body.position(t).magnitude();
        prop_assert!((r - body.radius()).abs() <= 1e-9 * body.radius(),
            "|p| = {} for radius {}", r, body.radius());
    }

    /// One period later the body is back where it started.
    #[test]
    fn prop_periodic(body in body_strategy(), t in -100.0f64..100.0) {
        let p0 = body.position(t);
        let p1 = body.position(t + body.period());
        prop_assert!(distance(&p0, &p1) <= 1e-8 * body.radius(),
            "moved {} over one period", distance(&p0, &p1));
    }

    /// Flat orbits have no out-of-plane component.
    #[test]
    fn prop_flat_orbit_matches_planar_model(
        radius in 0.5f64..50.0,
        w in 0.05f64..3.0,
        phase in -10.0f64..10.0,
        t in -100.0f64..100.0,
    ) {
        let body = OrbitingBody::new("flat", radius, w).unwrap().with_phase(phase).unwrap();
        let (x, y) = body.orbital_plane_position(t);
        let p = body.position(t);
        prop_assert_eq!(p.x, x);
        prop_assert_eq!(p.y, y);
        prop_assert_eq!(p.z, 0.0);
    }

    /// Separation does not depend on argument order.
    #[test]
    fn prop_distance_symmetric(
        a in prop::array::uniform3(-100.0f64..100.0),
        b in prop::array::uniform3(-100.0f64..100.0),
    ) {
        let p1 = Cartesian3::new(a[0], a[1], a[2]);
        let p2 = Cartesian3::new(b[0], b[1], b[2]);
        prop_assert_eq!(distance(&p1, &p2), distance(&p2, &p1));
    }

    /// Raising the threshold never removes an alert.
    #[test]
    fn prop_alerts_monotone_in_threshold(
        bodies in constellation_strategy(),
        t in -50.0f64..50.0,
        low in 0.0f64..20.0,
        extra in 0.0f64..20.0,
    ) {
        let narrow = check_close_approaches(&bodies, t, low);
        let wide = check_close_approaches(&bodies, t, low + extra);
        for alert in &narrow {
            prop_assert!(wide.iter().any(|w| w.body_a == alert.body_a && w.body_b == alert.body_b));
        }
    }

    /// Alerts are reported in input order and below the threshold.
    #[test]
    fn prop_alerts_ordered_and_strict(
        bodies in constellation_strategy(),
        t in -50.0f64..50.0,
        threshold in -1.0f64..30.0,
    ) {
        let alerts = check_close_approaches(&bodies, t, threshold);
        let index = |name: &str| bodies.iter().position(|b| b.name() == name).unwrap();

        let mut previous = None;
        for alert in &alerts {
            prop_assert!(alert.distance < threshold);
            let key = (index(&alert.body_a), index(&alert.body_b));
            prop_assert!(key.0 < key.1);
            if let Some(prev) = previous {
                prop_assert!(prev < key);
            }
            previous = Some(key);
        }
        if bodies.len() < 2 || threshold <= 0.0 {
            prop_assert!(alerts.is_empty());
        }
    }
}
