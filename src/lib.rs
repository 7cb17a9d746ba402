//! Sampling Studio - a signal sampling and reconstruction engine
//!
//! This library composes signals from sinusoidal components, injects noise at
//! a controllable SNR, samples the result at an arbitrary rate, and rebuilds it
//! with Whittaker–Shannon sinc interpolation so original, sampled, and
//! reconstructed waveforms can be compared side by side.
//!
//! ```
//! use sampling_studio::{SamplingRate, Session};
//!
//! let mut session = Session::default();
//! session.add_component(1.0, 5.0, 0.0);
//! session.compose(None, false, 50.0).unwrap();
//!
//! // Below Nyquist: the reconstruction aliases
//! let undersampled = session.render(SamplingRate::Normalized(1.0)).unwrap();
//! // Well above Nyquist: the reconstruction follows the original
//! let oversampled = session.render(SamplingRate::Normalized(10.0)).unwrap();
//! assert!(oversampled.error_within(100..900) < undersampled.error_within(100..900));
//! ```

pub mod component;
pub mod compositor;
pub mod config;
pub mod error;
pub mod grid;
pub mod noise;
pub mod registry;
pub mod resample;
pub mod series;
pub mod session;
pub mod signal;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use component::SignalComponent;
pub use compositor::{compose, sine_wave};
pub use config::{GridConfig, StudioConfig};
pub use error::{InvalidInput, Result, SamplingError};
pub use grid::TimeGrid;
pub use noise::{NoiseInjector, db_to_power_ratio, signal_power};
pub use registry::SignalRegistry;
pub use resample::{SamplingRate, interpolate, render, sinc};
pub use series::{Rendering, Series};
pub use session::Session;
pub use signal::Signal;
