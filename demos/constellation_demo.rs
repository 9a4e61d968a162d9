//! Walks the default constellation through a few animation frames
//!
//! Shows what a rendering layer would query each frame: marker positions,
//! alert listings, a closed trail per body, and a ground track for an
//! inclined orbit.

use orbitwatch::constants::{DEFAULT_TIME_STEP, DEFAULT_TRAIL_SAMPLES};
use orbitwatch::time::frame_times;
use orbitwatch::{OrbitingBody, Scenario, TimeWindow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Orbitwatch Constellation Demo");
    println!("=============================\n");

    let scenario = Scenario::default_constellation()?.with_threshold(2.5);

    // Every 20th frame of a 0.05-step animation, up to t = 7
    for t in frame_times(0.0, DEFAULT_TIME_STEP, 141).into_iter().step_by(20) {
        let alerts = scenario.alerts_at(t);
        let status = if alerts.is_empty() {
            "Orbital Path Visualizer".to_string()
        } else {
            format!("Close Approach Detected ({} pairs)", alerts.len())
        };
        println!("t = {:>5.2}  {}", t, status);
        for alert in alerts {
            println!(
                "           {} & {} - distance: {:.2}",
                alert.body_a, alert.body_b, alert.distance
            );
        }
    }

    println!("\nTrails (one period each):");
    for body in &scenario.bodies {
        let trail = body.trail(0.0, DEFAULT_TRAIL_SAMPLES)?;
        let first = trail.points()[0];
        let last = trail.points()[trail.len() - 1];
        println!(
            "  {:<6} period {:>6.3}, {} points, loop gap {:.2e}",
            body.name(),
            body.period(),
            trail.len(),
            first.distance_to(&last)
        );
    }

    println!("\nGround track of an inclined orbit:");
    let polar = OrbitingBody::new("Sat-P", 7.0, 0.5)?.with_inclination_degrees(65.0)?;
    let window = TimeWindow::new(0.0, polar.period(), 9)?;
    for (t, point) in window.times().iter().zip(polar.ground_track(&window)?) {
        println!(
            "  t = {:>6.2}  lat {:>7.2}  lon {:>8.2}",
            t, point.lat_deg, point.lon_deg
        );
    }

    Ok(())
}
