//! Error types for sampling-studio operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SamplingError>;

/// Errors that can occur while composing, sampling, or reconstructing a signal.
#[derive(Debug, Error)]
pub enum SamplingError {
    /// An input was rejected before any computation took place.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A rendering was requested before any composite signal was computed.
    #[error("no composite signal has been composed yet")]
    NoComposite,

    /// Failed to parse or serialize a configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to write an export.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read a WAV file.
    #[cfg(feature = "wav")]
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),
}

/// Input validation failures.
///
/// Each variant corresponds to a precondition that would otherwise produce
/// NaN or garbage further down the pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    /// A waveform does not line up with the time base it is paired with.
    #[error("expected {expected} samples, got {actual}")]
    LengthMismatch {
        /// Number of samples required.
        expected: usize,
        /// Number of samples supplied.
        actual: usize,
    },

    /// The effective sampling rate is zero, negative, or not finite.
    #[error("sampling rate must be positive and finite, got {0}")]
    NonPositiveRate(f64),

    /// Source sample times do not advance.
    #[error("source sample spacing must be positive and finite, got {0}")]
    ZeroSpacing(f64),

    /// Source sample times are not evenly spaced.
    #[error("source sample times are not uniformly spaced at index {index}")]
    NonUniformSpacing {
        /// Index of the first interval that deviates from the leading spacing.
        index: usize,
    },

    /// Too few points to define a sample spacing.
    #[error("at least 2 sample points are required, got {0}")]
    TooFewSamples(usize),

    /// A time grid definition is unusable.
    #[error("invalid time grid: start={start}, stop={stop}, step={step}")]
    InvalidGrid {
        /// First time point.
        start: f64,
        /// Exclusive end of the grid.
        stop: f64,
        /// Spacing between points.
        step: f64,
    },

    /// The requested SNR is NaN or infinite.
    #[error("snr must be finite, got {0} dB")]
    NonFiniteSnr(f64),

    /// The noise power derived from the reference and SNR is NaN or infinite.
    #[error("noise power must be finite, got {0}")]
    NonFiniteNoisePower(f64),

    /// A time grid definition would hold more points than can be allocated.
    #[error("time grid would hold {count} points, limit is {limit}")]
    TooManyPoints {
        /// Number of points the definition asks for.
        count: f64,
        /// Largest number of points accepted.
        limit: usize,
    },

    /// The sampling rate is finer than the reference grid can resolve.
    #[error("sampling rate {rate} Hz exceeds the reference grid resolution of {limit} Hz")]
    RateAboveGridResolution {
        /// Requested rate in Hz.
        rate: f64,
        /// Reciprocal of the reference grid spacing.
        limit: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_converts() {
        let err: SamplingError = InvalidInput::TooFewSamples(1).into();
        assert!(matches!(
            err,
            SamplingError::InvalidInput(InvalidInput::TooFewSamples(1))
        ));
    }

    #[test]
    fn test_display() {
        let err = SamplingError::from(InvalidInput::LengthMismatch {
            expected: 1000,
            actual: 3,
        });
        assert_eq!(err.to_string(), "invalid input: expected 1000 samples, got 3");
    }
}
