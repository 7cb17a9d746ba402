//! Time-indexed series handed to plotting and export collaborators.

use crate::error::{InvalidInput, Result};
use std::io::Write;

/// A waveform paired with the time points it was evaluated at.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl Series {
    /// Pairs `times` with `values`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::LengthMismatch`] if the lengths differ.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(InvalidInput::LengthMismatch {
                expected: times.len(),
                actual: values.len(),
            }
            .into());
        }
        Ok(Self { times, values })
    }

    /// Time points.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Amplitudes, one per time point.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over `(time, amplitude)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Writes the series as `time,amplitude` CSV rows with a header line.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "time,amplitude")?;
        for (t, v) in self.iter() {
            writeln!(writer, "{t},{v}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Output of one sample-and-reconstruct pass.
///
/// Carries everything the three comparison views need: samples over the
/// original, the reconstruction over the samples, and all three overlaid.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    pub(crate) effective_rate_hz: f64,
    pub(crate) samples: Series,
    pub(crate) original: Series,
    pub(crate) reconstructed: Series,
}

impl Rendering {
    /// Sampling rate actually used, in Hz.
    pub fn effective_rate_hz(&self) -> f64 {
        self.effective_rate_hz
    }

    /// Sample instants and the values taken there.
    pub fn samples(&self) -> &Series {
        &self.samples
    }

    /// The composite signal on the reference grid.
    pub fn original(&self) -> &Series {
        &self.original
    }

    /// The signal rebuilt from the samples on the reference grid.
    pub fn reconstructed(&self) -> &Series {
        &self.reconstructed
    }

    /// Largest absolute difference between reconstruction and original.
    pub fn max_abs_error(&self) -> f64 {
        self.error_within(0..self.original.len())
    }

    /// Largest absolute difference restricted to a range of grid indices.
    ///
    /// The sinc series is truncated at both ends of the window, so the edges
    /// carry most of the reconstruction error even above the Nyquist rate.
    /// The range is clamped to the grid; an empty range yields 0.
    pub fn error_within(&self, range: std::ops::Range<usize>) -> f64 {
        let len = self.original.len();
        let end = range.end.min(len);
        let start = range.start.min(end);
        self.original.values()[start..end]
            .iter()
            .zip(&self.reconstructed.values()[start..end])
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Exports the reconstructed series only, indexed by time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampling_studio::{SamplingRate, Session};
    ///
    /// let mut session = Session::default();
    /// session.compose(None, false, 50.0).unwrap();
    /// let rendering = session.render(SamplingRate::Normalized(4.0)).unwrap();
    ///
    /// let mut csv = Vec::new();
    /// rendering.write_csv(&mut csv).unwrap();
    /// let text = String::from_utf8(csv).unwrap();
    /// assert!(text.starts_with("time,amplitude\n"));
    /// assert_eq!(text.lines().count(), 1001);
    /// ```
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        self.reconstructed.write_csv(writer)
    }
}
