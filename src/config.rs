//! Session configuration.
//!
//! Configurations are plain serde structs and round-trip through TOML:
//!
//! ```toml
//! snr_db = 30.0
//! seed_component = false
//!
//! [grid]
//! start = 0.0
//! stop = 2.0
//! step = 0.002
//! ```
//!
//! Missing keys fall back to the defaults (1000-point grid over one second,
//! 50 dB SNR, seeded registry).

use crate::TimeGrid;
use crate::error::{InvalidInput, Result, SamplingError};
use serde::{Deserialize, Serialize};

/// Default signal-to-noise ratio in dB.
pub const DEFAULT_SNR_DB: f64 = 50.0;

/// Definition of the reference time grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First time point in seconds
    pub start: f64,
    /// Exclusive end in seconds
    pub stop: f64,
    /// Spacing in seconds
    pub step: f64,
}

impl GridConfig {
    /// Builds the time grid this configuration describes.
    pub fn build(&self) -> Result<TimeGrid> {
        TimeGrid::new(self.start, self.stop, self.step)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: TimeGrid::DEFAULT_START,
            stop: TimeGrid::DEFAULT_STOP,
            step: TimeGrid::DEFAULT_STEP,
        }
    }
}

/// Defaults a [`Session`](crate::Session) is built from.
///
/// # Examples
///
/// ```
/// use sampling_studio::StudioConfig;
///
/// let config = StudioConfig::from_toml_str("snr_db = 20.0").unwrap();
/// assert_eq!(config.snr_db, 20.0);
/// assert_eq!(config.grid.step, 0.001);
/// assert!(config.seed_component);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Reference time grid
    pub grid: GridConfig,
    /// Initial SNR setting in dB
    pub snr_db: f64,
    /// Whether the registry starts with the unit 1 Hz sine
    pub seed_component: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            snr_db: DEFAULT_SNR_DB,
            seed_component: true,
        }
    }
}

impl StudioConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| SamplingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| SamplingError::Config(e.to_string()))
    }

    /// Checks the grid definition and that the SNR is finite.
    pub fn validate(&self) -> Result<()> {
        self.grid.build()?;
        if !self.snr_db.is_finite() {
            return Err(InvalidInput::NonFiniteSnr(self.snr_db).into());
        }
        Ok(())
    }
}
