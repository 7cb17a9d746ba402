//! Sinusoidal signal components.

use crate::Signal;
use std::f64::consts::PI;

/// One sinusoid of a composite signal.
///
/// Evaluates to `amplitude * sin(2π * frequency * t + phase * π)`. The phase is
/// stored as a multiple of π, so `phase = 0.5` is a quarter-cycle shift.
///
/// Components are plain values: equality is exact float equality on all three
/// fields, which is how a [`SignalRegistry`](crate::SignalRegistry) finds the
/// component to remove.
///
/// # Examples
///
/// ```
/// use sampling_studio::{Signal, SignalComponent};
///
/// let cosine = SignalComponent::new(2.0, 1.0, 0.5);
/// assert!((cosine.value_at(0.0) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalComponent {
    /// Peak amplitude
    pub amplitude: f64,
    /// Frequency in Hz, expected to be positive
    pub frequency: f64,
    /// Phase offset as a multiple of π
    pub phase: f64,
}

impl SignalComponent {
    /// Creates a new component.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak amplitude
    /// * `frequency` - Frequency in Hz
    /// * `phase` - Phase offset as a multiple of π
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Phase offset in radians.
    pub fn phase_radians(&self) -> f64 {
        self.phase * PI
    }
}

impl Default for SignalComponent {
    /// The unit seed component: amplitude 1, 1 Hz, zero phase.
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }
}

impl Signal for SignalComponent {
    fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (self.frequency * 2.0 * PI * t + self.phase_radians()).sin()
    }
}
