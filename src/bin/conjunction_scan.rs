//! Conjunction Scan Tool
//!
//! Evaluates a constellation at a single time and, optionally, sweeps a time
//! window to report the closest approach of every pair.
//!
//! Usage:
//!   cargo run --bin conjunction_scan -- --time 6.0 --threshold 2.5
//!   cargo run --bin conjunction_scan -- --scenario my_scenario.json --sweep 0 20 201
//!   cargo run --bin conjunction_scan -- --synthetic 12 --seed 3 --sweep 0 50 1001 --output out/report.json

use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::info;
use orbitwatch::scenario::SyntheticConstellationConfig;
use orbitwatch::{PairSeparation, Scenario, TimeWindow};
use serde::Serialize;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Orbital close-approach scanner
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Reports close approaches between bodies on idealized circular orbits",
    long_about = None
)]
struct Args {
    /// Scenario JSON file (defaults to the built-in three-satellite preset)
    #[arg(short, long, conflicts_with = "synthetic")]
    scenario: Option<PathBuf>,

    /// Generate a random constellation with this many bodies instead
    #[arg(long)]
    synthetic: Option<usize>,

    /// Seed for the synthetic constellation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Give synthetic bodies random inclinations up to this many degrees
    #[arg(long, requires = "synthetic")]
    max_inclination: Option<f64>,

    /// Time at which to evaluate positions and alerts
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    time: f64,

    /// Override the scenario's alert threshold
    #[arg(long)]
    threshold: Option<f64>,

    /// Sweep a window: START END SAMPLES
    #[arg(long, num_args = 3, value_names = ["START", "END", "SAMPLES"], allow_negative_numbers = true)]
    sweep: Option<Vec<String>>,

    /// Print latitude/longitude for each body
    #[arg(long, action = ArgAction::SetTrue)]
    ground: bool,

    /// Write the sweep report as JSON (needs --sweep or a scenario window)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SweepReport {
    threshold: f64,
    window: TimeWindow,
    first_breach_time: Option<f64>,
    pairs: Vec<PairSeparation>,
}

fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = if let Some(path) = &args.scenario {
        Scenario::from_file(path)?
    } else if let Some(count) = args.synthetic {
        let mut config = SyntheticConstellationConfig::new()
            .with_count(count)
            .with_seed(args.seed)
            .with_random_phase(true);
        if let Some(max_inc) = args.max_inclination {
            config = config.with_inclination_range(0.0, max_inc);
        }
        config.generate_scenario()?
    } else {
        Scenario::default_constellation()?
    };

    if let Some(threshold) = args.threshold {
        scenario = scenario.with_threshold(threshold);
    }
    scenario.validate()?;
    Ok(scenario)
}

fn parse_window(values: &[String]) -> Result<TimeWindow> {
    let start: f64 = values[0].parse()?;
    let end: f64 = values[1].parse()?;
    let samples: usize = values[2].parse()?;
    Ok(TimeWindow::new(start, end, samples)?)
}

/// Picks the sweep window: `--sweep` wins over the scenario's own window
fn resolve_window(args: &Args, scenario: &Scenario) -> Result<Option<TimeWindow>> {
    let window = match &args.sweep {
        Some(values) => Some(parse_window(values)?),
        None => scenario.window,
    };
    if window.is_none() && args.output.is_some() {
        return Err("--output needs a sweep window: pass --sweep or a scenario with a window".into());
    }
    Ok(window)
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn display_positions(scenario: &Scenario, t: f64, ground: bool) -> Result<()> {
    print_section_header(&format!("Positions at t = {}", t));
    for body in &scenario.bodies {
        let p = body.position(t);
        print!(
            "{:<12} r={:<6.2} period={:<8.3} ({:>8.3}, {:>8.3}, {:>8.3})",
            body.name(),
            body.radius(),
            body.period(),
            p.x,
            p.y,
            p.z
        );
        if ground {
            let gp = body.lat_lon(t)?;
            print!("  lat={:>7.2} lon={:>8.2}", gp.lat_deg, gp.lon_deg);
        }
        println!();
    }
    Ok(())
}

fn display_alerts(scenario: &Scenario, t: f64) {
    let alerts = scenario.alerts_at(t);
    print_section_header(&format!("Close approaches (threshold {})", scenario.threshold));
    if alerts.is_empty() {
        println!("None");
    }
    for alert in &alerts {
        println!(
            "{} & {} - distance: {:.2}",
            alert.body_a, alert.body_b, alert.distance
        );
    }
}

fn run_sweep(scenario: &Scenario, window: TimeWindow, output: Option<&PathBuf>) -> Result<()> {
    let scenario = scenario.clone().with_window(window);
    let sweep = scenario.sweep()?;
    let closest = sweep.closest_approaches();
    let breach = sweep.first_breach(scenario.threshold);

    print_section_header(&format!(
        "Sweep t = {} .. {} ({} samples, step {:.4})",
        window.start,
        window.end,
        window.samples,
        window.step()?
    ));
    for pair in &closest {
        let marker = if pair.min_distance < scenario.threshold {
            "  <-- below threshold"
        } else {
            ""
        };
        println!(
            "{} & {}: min {:.3} at t = {:.3}{}",
            pair.body_a, pair.body_b, pair.min_distance, pair.time_of_min, marker
        );
    }
    match &breach {
        Some((t, alerts)) => println!("\nFirst breach at t = {:.3} ({} pairs)", t, alerts.len()),
        None => println!("\nNo pair crosses the threshold in this window"),
    }

    if let Some(path) = output {
        let report = SweepReport {
            threshold: scenario.threshold,
            window,
            first_breach_time: breach.map(|(t, _)| t),
            pairs: closest,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!("Wrote sweep report to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = load_scenario(&args)?;
    info!("Scanning {} bodies", scenario.bodies.len());

    display_positions(&scenario, args.time, args.ground)?;
    display_alerts(&scenario, args.time);

    if let Some(window) = resolve_window(&args, &scenario)? {
        run_sweep(&scenario, window, args.output.as_ref())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_inclination_requires_synthetic() {
        assert!(Args::try_parse_from(["conjunction_scan", "--max-inclination", "45"]).is_err());
        assert!(Args::try_parse_from([
            "conjunction_scan",
            "--synthetic",
            "8",
            "--max-inclination",
            "45"
        ])
        .is_ok());
    }

    #[test]
    fn test_output_without_window_is_rejected() {
        let scenario = Scenario::default_constellation().unwrap();

        let args = Args::try_parse_from(["conjunction_scan", "--output", "report.json"]).unwrap();
        assert!(resolve_window(&args, &scenario).is_err());

        let args = Args::try_parse_from([
            "conjunction_scan",
            "--sweep",
            "0",
            "20",
            "201",
            "--output",
            "report.json",
        ])
        .unwrap();
        let window = resolve_window(&args, &scenario).unwrap().unwrap();
        assert_eq!(window.samples, 201);

        let windowed = scenario.with_window(TimeWindow::new(-5.0, 5.0, 11).unwrap());
        let args = Args::try_parse_from(["conjunction_scan", "--output", "report.json"]).unwrap();
        assert_eq!(resolve_window(&args, &windowed).unwrap(), windowed.window);
    }
}
