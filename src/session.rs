//! Interactive session state.
//!
//! A [`Session`] owns everything one user works with: the reference grid, the
//! component registry, the SNR setting, the noise source, and the latest
//! composite. Front ends keep one session per user and drive it one request
//! at a time; nothing here is shared or locked.

use crate::compositor;
use crate::error::{InvalidInput, Result, SamplingError};
use crate::resample::{self, SamplingRate};
use crate::series::{Rendering, Series};
use crate::{NoiseInjector, SignalComponent, SignalRegistry, StudioConfig, TimeGrid};
use rand::Rng;
use tracing::debug;

/// One interactive sampling session.
///
/// # Examples
///
/// ```
/// use sampling_studio::{SamplingRate, Session};
///
/// let mut session = Session::default();
/// session.add_component(0.5, 8.0, 0.0);
/// assert_eq!(session.max_frequency(), 8.0);
///
/// session.compose(None, true, session.snr_db()).unwrap();
/// let rendering = session.render(SamplingRate::Normalized(2.5)).unwrap();
/// assert_eq!(rendering.effective_rate_hz(), 20.0);
/// ```
pub struct Session<R: Rng = rand::rngs::ThreadRng> {
    config: StudioConfig,
    grid: TimeGrid,
    registry: SignalRegistry,
    snr_db: f64,
    noise: NoiseInjector<R>,
    final_signal: Option<Vec<f64>>,
}

impl Session<rand::rngs::ThreadRng> {
    /// Creates a session from a configuration, drawing noise from ThreadRng.
    pub fn new(config: StudioConfig) -> Result<Self> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl Default for Session<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self {
            config: StudioConfig::default(),
            grid: TimeGrid::default(),
            registry: SignalRegistry::default(),
            snr_db: crate::config::DEFAULT_SNR_DB,
            noise: NoiseInjector::new(),
            final_signal: None,
        }
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session from a configuration with a custom noise RNG.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate.
    pub fn with_rng(config: StudioConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let registry = if config.seed_component {
            SignalRegistry::default()
        } else {
            SignalRegistry::empty()
        };
        Ok(Self {
            grid: config.grid.build()?,
            registry,
            snr_db: config.snr_db,
            noise: NoiseInjector::with_rng(rng),
            final_signal: None,
            config,
        })
    }

    /// Reference time grid.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Component registry.
    pub fn registry(&self) -> &SignalRegistry {
        &self.registry
    }

    /// Registered components in insertion order.
    pub fn components(&self) -> &[SignalComponent] {
        self.registry.list()
    }

    /// Adds a sinusoid to the registry.
    pub fn add_component(&mut self, amplitude: f64, frequency: f64, phase: f64) {
        self.registry.add(amplitude, frequency, phase);
    }

    /// Removes the first component with exactly these values, if any.
    pub fn remove_component(
        &mut self,
        amplitude: f64,
        frequency: f64,
        phase: f64,
    ) -> Option<SignalComponent> {
        self.registry.remove(amplitude, frequency, phase)
    }

    /// Removes every component.
    pub fn clear_components(&mut self) {
        self.registry.clear();
    }

    /// Highest registered frequency, floored at 1.
    pub fn max_frequency(&self) -> f64 {
        self.registry.max_frequency()
    }

    /// Current SNR setting in dB.
    pub fn snr_db(&self) -> f64 {
        self.snr_db
    }

    /// Updates the SNR setting. Independent of whether noise is enabled.
    ///
    /// # Errors
    ///
    /// Rejects NaN and infinite values.
    pub fn set_snr_db(&mut self, snr_db: f64) -> Result<()> {
        if !snr_db.is_finite() {
            return Err(InvalidInput::NonFiniteSnr(snr_db).into());
        }
        self.snr_db = snr_db;
        Ok(())
    }

    /// Composes the registered components (plus `base`) and optionally adds noise.
    ///
    /// Noise power is measured against the full composite, base waveform
    /// included. The result replaces the session's latest composite.
    ///
    /// # Arguments
    ///
    /// * `base` - Uploaded waveform aligned to the grid, or `None` for zeros
    /// * `noise_enabled` - Whether to add white Gaussian noise
    /// * `snr_db` - SNR for the noise, ignored when noise is disabled
    pub fn compose(
        &mut self,
        base: Option<&[f64]>,
        noise_enabled: bool,
        snr_db: f64,
    ) -> Result<&[f64]> {
        let mut composite = compositor::compose(&self.grid, self.registry.list(), base)?;

        if noise_enabled {
            let noise = self.noise.generate(&composite, snr_db)?;
            for (sample, n) in composite.iter_mut().zip(noise) {
                *sample += n;
            }
            debug!(snr_db, "noise added to composite");
        }

        Ok(self.final_signal.insert(composite).as_slice())
    }

    /// The latest composite, if one has been computed since the last reset.
    pub fn final_signal(&self) -> Option<&[f64]> {
        self.final_signal.as_deref()
    }

    /// The latest composite paired with the grid times.
    pub fn final_series(&self) -> Result<Series> {
        let signal = self.final_signal().ok_or(SamplingError::NoComposite)?;
        Series::new(self.grid.times().to_vec(), signal.to_vec())
    }

    /// Samples the latest composite at `rate` and reconstructs it.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::NoComposite`] before the first
    /// [`compose`](Self::compose), plus any error from [`resample::render`].
    pub fn render(&self, rate: SamplingRate) -> Result<Rendering> {
        let signal = self.final_signal().ok_or(SamplingError::NoComposite)?;
        resample::render(&self.grid, signal, rate, self.registry.max_frequency())
    }

    /// Previews a sinusoid on the session grid without registering it.
    pub fn preview_component(&self, amplitude: f64, frequency: f64, phase: f64) -> Vec<f64> {
        compositor::sine_wave(&self.grid, amplitude, frequency, phase)
    }

    /// Rebuilds the time grid from the configuration and recomputes derived state.
    ///
    /// Registry contents are kept; only the maximum frequency is recomputed.
    /// The latest composite is dropped since it may not match the new grid.
    pub fn reinitialize(&mut self) -> Result<()> {
        self.grid = self.config.grid.build()?;
        let max_frequency = self.registry.recompute_max_frequency();
        self.final_signal = None;
        debug!(
            points = self.grid.len(),
            components = self.registry.len(),
            max_frequency,
            "session reinitialized"
        );
        Ok(())
    }
}
