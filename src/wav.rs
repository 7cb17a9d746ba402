//! Loading uploaded waveforms from WAV files.
//!
//! Only available with the `wav` feature.

use crate::TimeGrid;
use crate::error::{InvalidInput, Result};
use hound::{SampleFormat, WavReader};
use std::path::Path;
use tracing::debug;

/// Reads a base waveform for `grid` from a WAV file.
///
/// The first channel is used. Integer samples are normalized to [-1.0, 1.0];
/// float samples are taken as-is. The file's own sample rate is ignored: the
/// first `grid.len()` samples are laid onto the grid point by point.
///
/// # Arguments
///
/// * `path` - Path to the WAV file
/// * `grid` - Reference grid the waveform must align with
///
/// # Errors
///
/// Returns [`InvalidInput::LengthMismatch`] if the file holds fewer frames
/// than the grid has points, or a WAV error if the file cannot be decoded.
///
/// # Examples
///
/// ```no_run
/// use sampling_studio::{Session, TimeGrid, wav::load_base_waveform};
///
/// let grid = TimeGrid::default();
/// let base = load_base_waveform("upload.wav", &grid).unwrap();
///
/// let mut session = Session::default();
/// session.compose(Some(&base), false, 50.0).unwrap();
/// ```
pub fn load_base_waveform<P: AsRef<Path>>(path: P, grid: &TimeGrid) -> Result<Vec<f64>> {
    let mut reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));
    let needed = grid.len();

    let samples: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .take(needed)
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .step_by(channels)
                .take(needed)
                .map(|s| s.map(|v| f64::from(v) / scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    if samples.len() < needed {
        return Err(InvalidInput::LengthMismatch {
            expected: needed,
            actual: samples.len(),
        }
        .into());
    }
    debug!(
        path = %path.as_ref().display(),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        "loaded base waveform"
    );

    Ok(samples)
}
