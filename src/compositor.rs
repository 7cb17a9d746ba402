//! Additive composition of signal components on the reference grid.
//!
//! Composition is a pure function of the grid, the components, and an optional
//! base waveform. Noise is layered on by the [`Session`](crate::Session), which
//! owns the random source.

use crate::error::{InvalidInput, Result};
use crate::{Signal, SignalComponent, TimeGrid};
use tracing::debug;

/// Sums `components` (plus an optional base waveform) on every point of `grid`.
///
/// Each component contributes `A * sin(2π f t + φπ)`. Without a base waveform
/// the sum starts from zero.
///
/// # Arguments
///
/// * `grid` - Reference time grid
/// * `components` - Sinusoids to add, in any order
/// * `base` - Externally supplied waveform aligned to `grid`
///
/// # Errors
///
/// Returns [`InvalidInput::LengthMismatch`] if `base` does not have exactly
/// `grid.len()` samples.
///
/// # Examples
///
/// ```
/// use sampling_studio::{compose, SignalComponent, TimeGrid};
///
/// let grid = TimeGrid::default();
/// let components = [SignalComponent::new(1.0, 1.0, 0.0)];
/// let composite = compose(&grid, &components, None).unwrap();
/// assert_eq!(composite.len(), grid.len());
/// assert!((composite[250] - 1.0).abs() < 1e-12);
/// ```
pub fn compose(
    grid: &TimeGrid,
    components: &[SignalComponent],
    base: Option<&[f64]>,
) -> Result<Vec<f64>> {
    let mut composite = match base {
        Some(base) => {
            check_aligned(grid, base)?;
            base.to_vec()
        }
        None => vec![0.0; grid.len()],
    };

    components.mix_into(grid.times(), &mut composite);
    debug!(
        components = components.len(),
        with_base = base.is_some(),
        points = grid.len(),
        "composed signal"
    );

    Ok(composite)
}

/// Renders a single sinusoid on `grid` without registering it anywhere.
///
/// Useful for previewing a component before adding it.
pub fn sine_wave(grid: &TimeGrid, amplitude: f64, frequency: f64, phase: f64) -> Vec<f64> {
    let mut wave = vec![0.0; grid.len()];
    SignalComponent::new(amplitude, frequency, phase).process(grid.times(), &mut wave);
    wave
}

pub(crate) fn check_aligned(grid: &TimeGrid, waveform: &[f64]) -> Result<()> {
    if waveform.len() != grid.len() {
        return Err(InvalidInput::LengthMismatch {
            expected: grid.len(),
            actual: waveform.len(),
        }
        .into());
    }
    Ok(())
}
