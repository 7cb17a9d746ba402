//! Sinc-based sampling and Whittaker–Shannon reconstruction.
//!
//! A band-limited signal known at uniformly spaced instants `s_i` can be
//! evaluated anywhere as
//!
//!   `y(t) = Σ_i a_i · sinc((t - s_i) / Δ)`
//!
//! where `Δ` is the sample spacing and `sinc(x) = sin(πx) / (πx)`. The same
//! formula is used in both directions: to take samples from the dense
//! reference grid, and to rebuild the dense grid from those samples.
//!
//! Reconstruction is exact only when the samples were taken at or above the
//! Nyquist rate (twice the highest component frequency). Below it the rebuilt
//! signal aliases, which is exactly what a sampling demonstration wants to
//! show.
//!
//! The evaluation is a direct O(|source| · |target|) sum with no FFT shortcut;
//! grids here are in the low thousands of points.
//!
//! # Example
//!
//! ```rust
//! use sampling_studio::resample::{render, SamplingRate};
//! use sampling_studio::{compose, SignalComponent, TimeGrid};
//!
//! let grid = TimeGrid::default();
//! let tone = [SignalComponent::new(1.0, 5.0, 0.0)];
//! let composite = compose(&grid, &tone, None).unwrap();
//!
//! // Ten times the highest frequency: well above Nyquist
//! let rendering = render(&grid, &composite, SamplingRate::Normalized(10.0), 5.0).unwrap();
//! assert_eq!(rendering.samples().len(), 50);
//! assert!(rendering.error_within(100..900) < 0.05);
//! ```

use crate::TimeGrid;
use crate::error::{InvalidInput, Result};
use crate::series::{Rendering, Series};
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Relative tolerance on sample spacing before source times count as non-uniform.
const SPACING_TOLERANCE: f64 = 1e-6;

/// Normalized sinc: `sin(πx) / (πx)`, with `sinc(0) = 1`.
///
/// # Examples
///
/// ```
/// use sampling_studio::resample::sinc;
///
/// assert_eq!(sinc(0.0), 1.0);
/// assert!(sinc(1.0).abs() < 1e-15);
/// assert!((sinc(0.5) - 2.0 / std::f64::consts::PI).abs() < 1e-15);
/// ```
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Evaluates the band-limited interpolant of a uniformly sampled signal.
///
/// # Arguments
///
/// * `target_times` - Instants to evaluate at
/// * `source_times` - Strictly increasing, uniformly spaced sample instants
/// * `source_amplitudes` - Sample values, one per source instant
///
/// # Returns
///
/// One amplitude per target instant
///
/// # Errors
///
/// All checks run before any computation:
/// - [`InvalidInput::LengthMismatch`] if sources and amplitudes differ in length
/// - [`InvalidInput::TooFewSamples`] with fewer than 2 source instants
/// - [`InvalidInput::ZeroSpacing`] if the spacing is not positive and finite
/// - [`InvalidInput::NonUniformSpacing`] if any interval deviates from the first
pub fn interpolate(
    target_times: &[f64],
    source_times: &[f64],
    source_amplitudes: &[f64],
) -> Result<Vec<f64>> {
    let spacing = uniform_spacing(source_times)?;
    if source_amplitudes.len() != source_times.len() {
        return Err(InvalidInput::LengthMismatch {
            expected: source_times.len(),
            actual: source_amplitudes.len(),
        }
        .into());
    }
    trace!(
        sources = source_times.len(),
        targets = target_times.len(),
        spacing,
        "sinc interpolation"
    );

    Ok(target_times
        .iter()
        .map(|&t| {
            source_times
                .iter()
                .zip(source_amplitudes)
                .map(|(&s, &a)| a * sinc((t - s) / spacing))
                .sum()
        })
        .collect())
}

/// Validates `times` as a uniform sampling and returns its spacing.
fn uniform_spacing(times: &[f64]) -> Result<f64> {
    if times.len() < 2 {
        return Err(InvalidInput::TooFewSamples(times.len()).into());
    }

    let spacing = times[1] - times[0];
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(InvalidInput::ZeroSpacing(spacing).into());
    }

    let tolerance = spacing * SPACING_TOLERANCE;
    if let Some(index) = times
        .windows(2)
        .position(|w| ((w[1] - w[0]) - spacing).abs() > tolerance)
    {
        return Err(InvalidInput::NonUniformSpacing { index }.into());
    }

    Ok(spacing)
}

/// How a sampling rate request is expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingRate {
    /// Sampling frequency in Hz.
    Absolute(f64),
    /// Multiple of the highest component frequency (2.0 is the Nyquist rate).
    Normalized(f64),
}

impl SamplingRate {
    /// Builds a request from a value and a flag selecting its interpretation.
    ///
    /// # Arguments
    ///
    /// * `value` - Rate in Hz, or a multiple of the maximum frequency
    /// * `normalized` - Whether `value` is a multiple of the maximum frequency
    pub fn new(value: f64, normalized: bool) -> Self {
        if normalized {
            Self::Normalized(value)
        } else {
            Self::Absolute(value)
        }
    }

    /// Resolves the request to a sampling frequency in Hz.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonPositiveRate`] unless the result is positive
    /// and finite.
    pub fn effective_hz(&self, max_frequency: f64) -> Result<f64> {
        let hz = match *self {
            Self::Absolute(hz) => hz,
            Self::Normalized(multiple) => multiple * max_frequency,
        };
        if !(hz.is_finite() && hz > 0.0) {
            return Err(InvalidInput::NonPositiveRate(hz).into());
        }
        Ok(hz)
    }
}

/// Returns true if `rate_hz` is at or above the Nyquist rate for `max_frequency`.
pub fn is_nyquist_satisfied(rate_hz: f64, max_frequency: f64) -> bool {
    rate_hz >= 2.0 * max_frequency
}

/// Samples `final_signal` at the requested rate and reconstructs it on `grid`.
///
/// Sample instants run from 0 up to (not including) the last grid point, one
/// every `1 / rate` seconds. Sample values are interpolated from the grid,
/// treating it as the continuous ground truth; the reconstruction is then
/// interpolated back from the samples onto every grid point.
///
/// # Arguments
///
/// * `grid` - Reference time grid `final_signal` is defined on
/// * `final_signal` - Composite signal, one value per grid point
/// * `rate` - Sampling rate request
/// * `max_frequency` - Highest component frequency, used by normalized rates
///
/// # Errors
///
/// - [`InvalidInput::LengthMismatch`] if `final_signal` is not aligned to `grid`
/// - [`InvalidInput::NonPositiveRate`] for a zero, negative, or non-finite rate
/// - [`InvalidInput::RateAboveGridResolution`] for a rate above `1 / grid.step()`
/// - [`InvalidInput::TooFewSamples`] if the rate yields fewer than 2 samples
///   over the grid span, or the grid itself has fewer than 2 points
pub fn render(
    grid: &TimeGrid,
    final_signal: &[f64],
    rate: SamplingRate,
    max_frequency: f64,
) -> Result<Rendering> {
    crate::compositor::check_aligned(grid, final_signal)?;
    let rate_hz = rate.effective_hz(max_frequency)?;
    let limit = 1.0 / grid.step();
    if rate_hz > limit * (1.0 + SPACING_TOLERANCE) {
        return Err(InvalidInput::RateAboveGridResolution {
            rate: rate_hz,
            limit,
        }
        .into());
    }

    // A single-point grid at 0 has no span to sample
    let sample_times = if grid.last() > 0.0 {
        TimeGrid::new(0.0, grid.last(), 1.0 / rate_hz)?
            .times()
            .to_vec()
    } else {
        Vec::new()
    };
    if sample_times.len() < 2 {
        return Err(InvalidInput::TooFewSamples(sample_times.len()).into());
    }
    if !is_nyquist_satisfied(rate_hz, max_frequency) {
        debug!(rate_hz, max_frequency, "sampling below the Nyquist rate");
    }

    let sample_values = interpolate(&sample_times, grid.times(), final_signal)?;
    let reconstructed = interpolate(grid.times(), &sample_times, &sample_values)?;
    debug!(
        rate_hz,
        samples = sample_times.len(),
        points = grid.len(),
        "rendered sampled signal"
    );

    Ok(Rendering {
        effective_rate_hz: rate_hz,
        samples: Series::new(sample_times, sample_values)?,
        original: Series::new(grid.times().to_vec(), final_signal.to_vec())?,
        reconstructed: Series::new(grid.times().to_vec(), reconstructed)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SamplingError, SignalComponent, compose};

    fn tone(grid: &TimeGrid, frequency: f64) -> Vec<f64> {
        compose(grid, &[SignalComponent::new(1.0, frequency, 0.0)], None).unwrap()
    }

    #[test]
    fn test_sinc_values() {
        assert_eq!(sinc(0.0), 1.0);
        for k in 1..20 {
            assert!(sinc(k as f64).abs() < 1e-14);
            assert!(sinc(-(k as f64)).abs() < 1e-14);
        }
        assert!((sinc(0.5) - sinc(-0.5)).abs() < 1e-15);
        assert!(sinc(1e-300).is_finite());
    }

    #[test]
    fn test_identity_interpolation() {
        let grid = TimeGrid::default();
        let x: Vec<f64> = (0..grid.len())
            .map(|i| ((i * 7919) % 1000) as f64 / 500.0 - 1.0)
            .collect();
        let y = interpolate(grid.times(), grid.times(), &x).unwrap();
        for (a, b) in x.iter().zip(&y) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_interpolates_between_samples() {
        // Constant sequence: midpoints pick up every kernel's side lobes
        let times: Vec<f64> = (0..400).map(|i| i as f64 * 0.5).collect();
        let values = vec![1.0; times.len()];
        let mid = interpolate(&[100.25], &times, &values).unwrap();
        assert!((mid[0] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_interpolate_validation() {
        let err = interpolate(&[0.0], &[0.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidInput(InvalidInput::TooFewSamples(1))
        ));

        let err = interpolate(&[0.0], &[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidInput(InvalidInput::ZeroSpacing(_))
        ));

        let err = interpolate(&[0.0], &[1.0, 0.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidInput(InvalidInput::ZeroSpacing(_))
        ));

        let err = interpolate(&[0.0], &[0.0, 1.0, 3.0], &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidInput(InvalidInput::NonUniformSpacing { index: 1 })
        ));

        let err = interpolate(&[0.0], &[0.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidInput(InvalidInput::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_effective_rate() {
        assert_eq!(SamplingRate::new(40.0, false).effective_hz(5.0).unwrap(), 40.0);
        assert_eq!(SamplingRate::new(4.0, true).effective_hz(5.0).unwrap(), 20.0);

        for rate in [
            SamplingRate::Absolute(0.0),
            SamplingRate::Absolute(-3.0),
            SamplingRate::Absolute(f64::NAN),
            SamplingRate::Normalized(2.0 * f64::MAX),
        ] {
            assert!(matches!(
                rate.effective_hz(1.0),
                Err(SamplingError::InvalidInput(InvalidInput::NonPositiveRate(_)))
            ));
        }
        assert!(SamplingRate::Normalized(3.0).effective_hz(0.0).is_err());
    }

    #[test]
    fn test_nyquist_check() {
        assert!(is_nyquist_satisfied(10.0, 5.0));
        assert!(!is_nyquist_satisfied(9.9, 5.0));
    }

    #[test]
    fn test_sample_times() {
        let grid = TimeGrid::default();
        let rendering =
            render(&grid, &tone(&grid, 1.0), SamplingRate::Absolute(4.0), 1.0).unwrap();
        assert_eq!(rendering.samples().times(), &[0.0, 0.25, 0.5, 0.75]);
        assert_eq!(rendering.effective_rate_hz(), 4.0);
        assert_eq!(rendering.original().len(), grid.len());
        assert_eq!(rendering.reconstructed().len(), grid.len());
    }

    #[test]
    fn test_samples_follow_the_signal() {
        let grid = TimeGrid::default();
        let rendering =
            render(&grid, &tone(&grid, 5.0), SamplingRate::Absolute(50.0), 5.0).unwrap();
        for (t, v) in rendering.samples().iter() {
            assert!((v - (2.0 * PI * 5.0 * t).sin()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_oversampled_reconstruction() {
        let grid = TimeGrid::default();
        let rendering =
            render(&grid, &tone(&grid, 5.0), SamplingRate::Normalized(10.0), 5.0).unwrap();
        assert!(rendering.error_within(100..900) < 0.05);
    }

    #[test]
    fn test_undersampled_reconstruction_aliases() {
        let grid = TimeGrid::default();
        let rendering =
            render(&grid, &tone(&grid, 5.0), SamplingRate::Normalized(1.0), 5.0).unwrap();
        assert!(rendering.max_abs_error() > 0.3);
    }

    #[test]
    fn test_render_rejects_rate_finer_than_grid() {
        let grid = TimeGrid::default();
        let signal = tone(&grid, 1.0);
        for rate in [SamplingRate::Absolute(1e20), SamplingRate::Normalized(1e6)] {
            let err = render(&grid, &signal, rate, 1.0).unwrap_err();
            assert!(matches!(
                err,
                SamplingError::InvalidInput(InvalidInput::RateAboveGridResolution { .. })
            ));
        }
        // Sampling at the grid resolution itself is accepted
        assert!(render(&grid, &signal, SamplingRate::Absolute(1000.0), 1.0).is_ok());
    }

    #[test]
    fn test_render_rejects_too_low_rate() {
        let grid = TimeGrid::default();
        let err = render(&grid, &tone(&grid, 1.0), SamplingRate::Absolute(1.0), 1.0).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidInput(InvalidInput::TooFewSamples(1))
        ));
    }

    #[test]
    fn test_render_rejects_misaligned_signal() {
        let grid = TimeGrid::default();
        let err = render(&grid, &[0.0; 10], SamplingRate::Absolute(10.0), 1.0).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidInput(InvalidInput::LengthMismatch { .. })
        ));
    }
}
