//! Time sampling helpers
//!
//! Time is an abstract scalar; negative values are times before the
//! reference epoch `t = 0`. Trails, ground tracks and swept conjunction
//! checks all evaluate bodies over evenly spaced samples produced here.

use serde::{Deserialize, Serialize};

use crate::{OrbitError, Result};

/// Evenly spaced samples from `start` to `end`, both endpoints included
///
/// Fewer than two samples collapse to `[start]` (or nothing for zero).
/// The last sample is exactly `end`.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = end - start;
            let last = (num - 1) as f64;
            let mut result: Vec<f64> = (0..num)
                .map(|i| start + span * (i as f64 / last))
                .collect();
            result[num - 1] = end;
            result
        }
    }
}

/// Frame times for an animation advancing by `step` from `start`
pub fn frame_times(start: f64, step: f64, frames: usize) -> Vec<f64> {
    (0..frames).map(|i| start + step * i as f64).collect()
}

/// A sampled time range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

impl TimeWindow {
    /// Creates a window, rejecting non-finite bounds and fewer than two samples
    ///
    /// # Arguments
    /// * `start` - First sample time
    /// * `end` - Last sample time, may be before `start`
    /// * `samples` - Number of samples, both endpoints included
    ///
    /// # Examples
    ///
    /// ```
    /// use orbitwatch::TimeWindow;
    ///
    /// let window = TimeWindow::new(0.0, 20.0, 201)?;
    /// assert_eq!(window.times().len(), 201);
    /// assert!((window.step()? - 0.1).abs() < 1e-12);
    /// # Ok::<(), orbitwatch::OrbitError>(())
    /// ```
    pub fn new(start: f64, end: f64, samples: usize) -> Result<Self> {
        let window = Self {
            start,
            end,
            samples,
        };
        window.validate()?;
        Ok(window)
    }

    /// Checks the invariants enforced by [`TimeWindow::new`]
    ///
    /// Windows built from deserialized configuration skip the constructor,
    /// so consumers call this before sampling.
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(OrbitError::InvalidParameter(format!(
                "time window bounds must be finite, got [{}, {}]",
                self.start, self.end
            )));
        }
        if self.samples < 2 {
            return Err(OrbitError::InvalidParameter(format!(
                "time window needs at least 2 samples, got {}",
                self.samples
            )));
        }
        Ok(())
    }

    /// Length of the window (negative when `end < start`)
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Spacing between consecutive samples
    ///
    /// # Errors
    ///
    /// `OrbitError::InvalidParameter` when the window fails [`TimeWindow::validate`],
    /// e.g. a deserialized window with fewer than two samples.
    pub fn step(&self) -> Result<f64> {
        self.validate()?;
        Ok(self.duration() / (self.samples - 1) as f64)
    }

    /// All sample times, ascending when `start <= end`
    pub fn times(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.samples)
    }
}
