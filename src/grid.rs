//! Evenly spaced time grids.
//!
//! A [`TimeGrid`] is the time base every waveform in this crate is defined on.
//! The reference grid approximates "continuous" time; sparser grids built with
//! the same constructor hold the sample instants of a sampling pass.

use crate::error::{InvalidInput, Result};

/// An immutable, evenly spaced set of time points.
///
/// Points are `start + i * step` for every `i` such that the point lies in
/// `[start, stop)`, matching a half-open range.
///
/// # Examples
///
/// ```
/// use sampling_studio::TimeGrid;
///
/// let grid = TimeGrid::default();
/// assert_eq!(grid.len(), 1000);
/// assert_eq!(grid.times()[0], 0.0);
/// assert!((grid.last() - 0.999).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    start: f64,
    stop: f64,
    step: f64,
    times: Vec<f64>,
}

impl TimeGrid {
    /// Default first time point in seconds.
    pub const DEFAULT_START: f64 = 0.0;
    /// Default exclusive end in seconds.
    pub const DEFAULT_STOP: f64 = 1.0;
    /// Default spacing in seconds (1000 points per second).
    pub const DEFAULT_STEP: f64 = 0.001;
    /// Largest number of points a grid may hold.
    pub const MAX_POINTS: usize = 10_000_000;

    /// Creates a grid covering `[start, stop)` with the given spacing.
    ///
    /// # Arguments
    ///
    /// * `start` - First time point
    /// * `stop` - Exclusive upper bound
    /// * `step` - Spacing between consecutive points, must be positive
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::InvalidGrid`] when any argument is not finite,
    /// `step <= 0`, or `stop <= start`, and [`InvalidInput::TooManyPoints`]
    /// when the grid would exceed [`TimeGrid::MAX_POINTS`].
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        let valid = start.is_finite()
            && stop.is_finite()
            && step.is_finite()
            && step > 0.0
            && stop > start;
        if !valid {
            return Err(InvalidInput::InvalidGrid { start, stop, step }.into());
        }

        let count = ((stop - start) / step).ceil();
        if !(count <= Self::MAX_POINTS as f64) {
            return Err(InvalidInput::TooManyPoints {
                count,
                limit: Self::MAX_POINTS,
            }
            .into());
        }

        Ok(Self::build(start, stop, step))
    }

    fn build(start: f64, stop: f64, step: f64) -> Self {
        let count = ((stop - start) / step).ceil() as usize;
        let times = (0..count).map(|i| start + i as f64 * step).collect();
        Self {
            start,
            stop,
            step,
            times,
        }
    }

    /// All time points, in increasing order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of time points.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the grid holds no points.
    ///
    /// Grids built through [`TimeGrid::new`] always hold at least one point.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First time point.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Exclusive upper bound the grid was built with.
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Spacing between consecutive points.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Last time point actually on the grid.
    pub fn last(&self) -> f64 {
        self.times.last().copied().unwrap_or(self.start)
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::build(Self::DEFAULT_START, Self::DEFAULT_STOP, Self::DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SamplingError;

    #[test]
    fn test_default_grid() {
        let grid = TimeGrid::default();
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid.step(), 0.001);
        assert!((grid.times()[500] - 0.5).abs() < 1e-12);
        assert_eq!(grid, TimeGrid::new(0.0, 1.0, 0.001).unwrap());
    }

    #[test]
    fn test_half_open_range() {
        let grid = TimeGrid::new(0.0, 1.0, 0.25).unwrap();
        assert_eq!(grid.times(), &[0.0, 0.25, 0.5, 0.75]);
        assert_eq!(grid.last(), 0.75);
    }

    #[test]
    fn test_step_larger_than_span() {
        let grid = TimeGrid::new(0.0, 0.5, 2.0).unwrap();
        assert_eq!(grid.times(), &[0.0]);
    }

    #[test]
    fn test_rejects_oversized_grid() {
        for step in [1e-300, 1e-8] {
            let err = TimeGrid::new(0.0, 1.0, step).unwrap_err();
            assert!(matches!(
                err,
                SamplingError::InvalidInput(InvalidInput::TooManyPoints {
                    limit: TimeGrid::MAX_POINTS,
                    ..
                })
            ));
        }
        assert_eq!(TimeGrid::new(0.0, 1.0, 1e-5).unwrap().len(), 100_000);
    }

    #[test]
    fn test_rejects_bad_definitions() {
        for (start, stop, step) in [
            (0.0, 1.0, 0.0),
            (0.0, 1.0, -0.1),
            (1.0, 1.0, 0.1),
            (1.0, 0.0, 0.1),
            (0.0, f64::NAN, 0.1),
            (0.0, 1.0, f64::INFINITY),
        ] {
            let err = TimeGrid::new(start, stop, step).unwrap_err();
            assert!(matches!(
                err,
                SamplingError::InvalidInput(InvalidInput::InvalidGrid { .. })
            ));
        }
    }
}
