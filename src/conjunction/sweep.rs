//! Swept-time separation analysis
//!
//! Repeats the instantaneous pair check over a sequence of sample times and
//! keeps every pair distance, so trend views can plot separation over time
//! and ask whether a pair ever dipped below a critical value. Distances are
//! produced by [`crate::coordinates::distance`], the same function the live
//! alert path uses, so an alert derived from a sweep sample is identical to
//! one from [`check_close_approaches`](super::check_close_approaches).

use log::debug;
use ndarray::{Array2, ArrayView1, Axis};
use serde::Serialize;

use super::{alerts_from_positions, ConjunctionAlert};
use crate::body::OrbitingBody;
use crate::coordinates::{distance, Cartesian3};

/// Closest approach of one pair within a sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSeparation {
    pub body_a: String,
    pub body_b: String,
    /// Smallest sampled distance
    pub min_distance: f64,
    /// Sample time at which `min_distance` occurred (earliest on ties)
    pub time_of_min: f64,
}

/// Pair distances for every sample of a time sweep
///
/// Row `k` of [`SeparationSweep::distances`] belongs to the `k`-th pair in
/// ascending `(i, j)` order; column `s` to the `s`-th sample time.
#[derive(Debug, Clone)]
pub struct SeparationSweep {
    bodies: Vec<OrbitingBody>,
    pairs: Vec<(usize, usize)>,
    times: Vec<f64>,
    distances: Array2<f64>,
}

/// Evaluates all pair distances of `bodies` at each of `times`
///
/// The bodies are cloned into the result so it stays self-contained once
/// the caller mutates its own collection.
pub fn sweep_separations(bodies: &[OrbitingBody], times: &[f64]) -> SeparationSweep {
    let pairs: Vec<(usize, usize)> = (0..bodies.len())
        .flat_map(|i| ((i + 1)..bodies.len()).map(move |j| (i, j)))
        .collect();

    let mut distances = Array2::<f64>::zeros((pairs.len(), times.len()));
    for (s, &t) in times.iter().enumerate() {
        let positions: Vec<Cartesian3> = bodies.iter().map(|body| body.position(t)).collect();
        for (k, &(i, j)) in pairs.iter().enumerate() {
            distances[[k, s]] = distance(&positions[i], &positions[j]);
        }
    }

    debug!("swept {} pairs over {} samples", pairs.len(), times.len());

    SeparationSweep {
        bodies: bodies.to_vec(),
        pairs,
        times: times.to_vec(),
        distances,
    }
}

impl SeparationSweep {
    /// Sample times, one per matrix column
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// `(pairs × samples)` distance matrix
    pub fn distances(&self) -> &Array2<f64> {
        &self.distances
    }

    /// Number of body pairs in the sweep
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Names of the two bodies in pair row `k`
    pub fn pair_names(&self, k: usize) -> Option<(&str, &str)> {
        self.pairs
            .get(k)
            .map(|&(i, j)| (self.bodies[i].name(), self.bodies[j].name()))
    }

    /// Row index of the pair formed by bodies `a` and `b`, in either order
    pub fn pair_index(&self, a: &str, b: &str) -> Option<usize> {
        self.pairs.iter().position(|&(i, j)| {
            let (ni, nj) = (self.bodies[i].name(), self.bodies[j].name());
            (ni == a && nj == b) || (ni == b && nj == a)
        })
    }

    /// Distance-over-time series for pair row `k`
    pub fn series(&self, k: usize) -> Option<ArrayView1<'_, f64>> {
        (k < self.pairs.len()).then(|| self.distances.row(k))
    }

    /// Closest sampled approach of every pair, in pair order
    ///
    /// Empty when the sweep has no samples.
    pub fn closest_approaches(&self) -> Vec<PairSeparation> {
        if self.times.is_empty() {
            return Vec::new();
        }

        self.distances
            .axis_iter(Axis(0))
            .zip(&self.pairs)
            .map(|(row, &(i, j))| {
                let (s_min, d_min) = row.iter().enumerate().fold(
                    (0, row[0]),
                    |(best_s, best_d), (s, &d)| if d < best_d { (s, d) } else { (best_s, best_d) },
                );
                PairSeparation {
                    body_a: self.bodies[i].name().to_string(),
                    body_b: self.bodies[j].name().to_string(),
                    min_distance: d_min,
                    time_of_min: self.times[s_min],
                }
            })
            .collect()
    }

    /// Pairs whose sampled separation ever falls strictly below `critical`
    pub fn dips_below(&self, critical: f64) -> Vec<PairSeparation> {
        self.closest_approaches()
            .into_iter()
            .filter(|pair| pair.min_distance < critical)
            .collect()
    }

    /// Alerts at sample `s`, identical to the instantaneous check at `times[s]`
    pub fn alerts_at(&self, s: usize, threshold: f64) -> Vec<ConjunctionAlert> {
        let Some(&t) = self.times.get(s) else {
            return Vec::new();
        };
        let positions: Vec<Cartesian3> = self.bodies.iter().map(|body| body.position(t)).collect();
        alerts_from_positions(&self.bodies, &positions, threshold)
    }

    /// Earliest sample with at least one alert, with those alerts
    pub fn first_breach(&self, threshold: f64) -> Option<(f64, Vec<ConjunctionAlert>)> {
        (0..self.times.len())
            .find(|&s| self.distances.column(s).iter().any(|&d| d < threshold))
            .map(|s| (self.times[s], self.alerts_at(s, threshold)))
    }

    /// Number of alerting pairs at each sample
    pub fn alert_counts(&self, threshold: f64) -> Vec<usize> {
        self.distances
            .axis_iter(Axis(1))
            .map(|column| column.iter().filter(|&&d| d < threshold).count())
            .collect()
    }
}
