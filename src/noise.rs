//! Additive white Gaussian noise calibrated to a target SNR.

use crate::error::{InvalidInput, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::trace;

/// Converts a ratio in decibels to a linear power ratio.
pub fn db_to_power_ratio(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Population variance of a signal: `mean((x - mean(x))²)`.
///
/// This is the "power" the noise is calibrated against, so a DC offset in
/// the reference does not count towards it. An empty signal has power 0.
pub fn signal_power(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let n = signal.len() as f64;
    let mean = signal.iter().sum::<f64>() / n;
    signal.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n
}

/// Generates white Gaussian noise at a requested signal-to-noise ratio.
///
/// The noise power is `signal_power(reference) / 10^(snr_db / 10)`, so higher
/// SNR means quieter noise. A reference with zero variance yields noise power
/// 0 and an all-zero realization; this is the defined behavior, not an error.
pub struct NoiseInjector<R: Rng = rand::rngs::ThreadRng> {
    /// Random number generator
    rng: R,
}

impl NoiseInjector<rand::rngs::ThreadRng> {
    /// Creates a new noise injector with the default ThreadRng.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampling_studio::NoiseInjector;
    ///
    /// let mut injector = NoiseInjector::new();
    /// let reference = [1.0, -1.0, 1.0, -1.0];
    /// let noise = injector.generate(&reference, 20.0).unwrap();
    /// assert_eq!(noise.len(), reference.len());
    /// ```
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for NoiseInjector<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NoiseInjector<R> {
    /// Creates a new noise injector with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator to use
    ///
    /// # Examples
    ///
    /// ```
    /// use sampling_studio::NoiseInjector;
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut injector = NoiseInjector::with_rng(rng);
    /// let noise = injector.generate(&[0.0, 1.0, 0.0, -1.0], 10.0).unwrap();
    /// assert_eq!(noise.len(), 4);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws one noise realization calibrated to `reference` at `snr_db`.
    ///
    /// # Arguments
    ///
    /// * `reference` - Signal the noise power is measured against
    /// * `snr_db` - Target signal-to-noise ratio in decibels
    ///
    /// # Returns
    ///
    /// A noise vector with the same length as `reference`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonFiniteSnr`] if `snr_db` is NaN or infinite,
    /// and [`InvalidInput::NonFiniteNoisePower`] if the derived noise power is
    /// not finite (a NaN in `reference`, or an SNR so low its ratio underflows).
    pub fn generate(&mut self, reference: &[f64], snr_db: f64) -> Result<Vec<f64>> {
        if !snr_db.is_finite() {
            return Err(InvalidInput::NonFiniteSnr(snr_db).into());
        }

        let noise_power = signal_power(reference) / db_to_power_ratio(snr_db);
        trace!(len = reference.len(), snr_db, noise_power, "generating noise");

        if !noise_power.is_finite() {
            return Err(InvalidInput::NonFiniteNoisePower(noise_power).into());
        }
        if noise_power == 0.0 {
            return Ok(vec![0.0; reference.len()]);
        }

        let dist = Normal::new(0.0, noise_power.sqrt())
            .map_err(|_| InvalidInput::NonFiniteNoisePower(noise_power))?;
        Ok((0..reference.len())
            .map(|_| dist.sample(&mut self.rng))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SamplingError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sine(len: usize, frequency: f64) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * std::f64::consts::PI * frequency * i as f64 / len as f64).sin())
            .collect()
    }

    #[test]
    fn test_signal_power() {
        assert_eq!(signal_power(&[]), 0.0);
        assert_eq!(signal_power(&[3.0, 3.0, 3.0]), 0.0);
        assert_eq!(signal_power(&[1.0, -1.0, 1.0, -1.0]), 1.0);
        // DC offset does not count
        assert_eq!(signal_power(&[6.0, 4.0, 6.0, 4.0]), 1.0);
        assert!((signal_power(&sine(1000, 3.0)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_db_conversion() {
        assert_eq!(db_to_power_ratio(0.0), 1.0);
        assert!((db_to_power_ratio(10.0) - 10.0).abs() < 1e-12);
        assert!((db_to_power_ratio(-20.0) - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_zero_variance_reference_gives_zero_noise() {
        let mut injector = NoiseInjector::with_rng(StdRng::seed_from_u64(1));
        let noise = injector.generate(&[2.5; 64], 0.0).unwrap();
        assert_eq!(noise, vec![0.0; 64]);
        assert_eq!(signal_power(&noise), 0.0);
    }

    #[test]
    fn test_empty_reference() {
        let mut injector = NoiseInjector::with_rng(StdRng::seed_from_u64(1));
        assert!(injector.generate(&[], 10.0).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_finite_snr() {
        let mut injector = NoiseInjector::new();
        for snr in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                injector.generate(&[1.0, -1.0], snr),
                Err(SamplingError::InvalidInput(InvalidInput::NonFiniteSnr(_)))
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite_noise_power() {
        let mut injector = NoiseInjector::with_rng(StdRng::seed_from_u64(1));
        assert!(matches!(
            injector.generate(&[1.0, -1.0, 1.0, -1.0], -4000.0),
            Err(SamplingError::InvalidInput(InvalidInput::NonFiniteNoisePower(p)))
                if p.is_infinite()
        ));
        assert!(matches!(
            injector.generate(&[1.0, f64::NAN, -1.0], 10.0),
            Err(SamplingError::InvalidInput(InvalidInput::NonFiniteNoisePower(p))) if p.is_nan()
        ));
    }

    #[test]
    fn test_zero_db_matches_signal_power() {
        let reference = sine(1000, 5.0);
        let mut injector = NoiseInjector::with_rng(StdRng::seed_from_u64(42));

        let trials = 200;
        let mean_power = (0..trials)
            .map(|_| {
                let noise = injector.generate(&reference, 0.0).unwrap();
                noise.iter().map(|x| x * x).sum::<f64>() / noise.len() as f64
            })
            .sum::<f64>()
            / trials as f64;

        let ratio = mean_power / signal_power(&reference);
        assert!((ratio - 1.0).abs() < 0.05, "ratio was {ratio}");
    }

    #[test]
    fn test_higher_snr_is_quieter() {
        let reference = sine(2000, 2.0);
        let mut injector = NoiseInjector::with_rng(StdRng::seed_from_u64(7));

        let powers: Vec<f64> = [0.0, 10.0, 20.0, 40.0]
            .iter()
            .map(|&snr| signal_power(&injector.generate(&reference, snr).unwrap()))
            .collect();

        for pair in powers.windows(2) {
            assert!(pair[1] < pair[0], "noise power not decreasing: {powers:?}");
        }
        // 40 dB is a factor of 10^4 below the signal power
        assert!((powers[3] / 0.5e-4 - 1.0).abs() < 0.15);
    }

    #[test]
    fn test_noise_is_zero_mean() {
        let reference = sine(10_000, 4.0);
        let mut injector = NoiseInjector::with_rng(StdRng::seed_from_u64(3));
        let noise = injector.generate(&reference, 0.0).unwrap();
        let mean = noise.iter().sum::<f64>() / noise.len() as f64;
        // Standard error of the mean is sqrt(0.5 / 10_000) ≈ 0.007
        assert!(mean.abs() < 0.03);
    }
}
