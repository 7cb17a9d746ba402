//! Core continuous-time signal trait.
//!
//! This module provides the fundamental `Signal` trait that represents
//! anything that can be evaluated at an arbitrary instant and rendered onto a
//! time grid.

/// Common interface for all continuous-time signal sources.
///
/// The trait provides two fundamental operations:
/// - Point evaluation via `value_at()`
/// - Batch rendering onto a set of time points via `process()` and `mix_into()`
pub trait Signal {
    /// Evaluates the signal at time `t` (in seconds).
    fn value_at(&self, t: f64) -> f64;

    /// Renders the signal at every time point into a buffer, overwriting it.
    ///
    /// Only `min(times.len(), buffer.len())` samples are written.
    ///
    /// # Arguments
    ///
    /// * `times` - Time points to evaluate at
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&self, times: &[f64], buffer: &mut [f64]) {
        for (sample, &t) in buffer.iter_mut().zip(times) {
            *sample = self.value_at(t);
        }
    }

    /// Adds the signal at every time point onto an existing buffer.
    ///
    /// Default implementation calls `value_at()` for each element.
    fn mix_into(&self, times: &[f64], buffer: &mut [f64]) {
        for (sample, &t) in buffer.iter_mut().zip(times) {
            *sample += self.value_at(t);
        }
    }
}

/// A slice of signals is their sum.
impl<S: Signal> Signal for [S] {
    fn value_at(&self, t: f64) -> f64 {
        self.iter().map(|s| s.value_at(t)).sum()
    }

    fn mix_into(&self, times: &[f64], buffer: &mut [f64]) {
        for signal in self {
            signal.mix_into(times, buffer);
        }
    }
}
