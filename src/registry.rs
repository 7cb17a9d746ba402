//! Ordered registry of signal components.

use crate::SignalComponent;
use tracing::debug;

/// Floor applied to the cached maximum frequency.
pub const MIN_MAX_FREQUENCY: f64 = 1.0;

/// Ordered collection of [`SignalComponent`]s with a cached maximum frequency.
///
/// The registry starts with the unit seed component (`1 * sin(2π t)`) unless
/// built with [`SignalRegistry::empty`] or explicitly cleared. Insertion order
/// is preserved; it does not affect the sum, only which duplicate a removal
/// hits.
///
/// `max_frequency` is the largest component frequency, never less than 1. It
/// drives normalized sampling rates, so keeping it at least 1 guarantees a
/// positive effective rate from the registry side.
///
/// # Examples
///
/// ```
/// use sampling_studio::SignalRegistry;
///
/// let mut registry = SignalRegistry::default();
/// registry.add(1.0, 3.0, 0.0);
/// registry.add(0.5, 2.0, 0.0);
/// assert_eq!(registry.max_frequency(), 3.0);
///
/// registry.remove(1.0, 3.0, 0.0);
/// assert_eq!(registry.max_frequency(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRegistry {
    components: Vec<SignalComponent>,
    max_frequency: f64,
}

impl SignalRegistry {
    /// Creates a registry without the seed component.
    pub fn empty() -> Self {
        Self {
            components: Vec::new(),
            max_frequency: MIN_MAX_FREQUENCY,
        }
    }

    /// Appends a component built from the given triple.
    ///
    /// Duplicates are allowed.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak amplitude
    /// * `frequency` - Frequency in Hz
    /// * `phase` - Phase offset as a multiple of π
    pub fn add(&mut self, amplitude: f64, frequency: f64, phase: f64) {
        self.push(SignalComponent::new(amplitude, frequency, phase));
    }

    /// Appends an existing component.
    pub fn push(&mut self, component: SignalComponent) {
        self.components.push(component);
        self.max_frequency = self.max_frequency.max(component.frequency);
        debug!(
            amplitude = component.amplitude,
            frequency = component.frequency,
            phase = component.phase,
            max_frequency = self.max_frequency,
            "component added"
        );
    }

    /// Removes the first component exactly equal to the given triple.
    ///
    /// Matching uses float equality, so callers must pass back the identical
    /// values used when adding. A triple that is not present is a no-op.
    ///
    /// If the removed component's frequency equals the cached maximum, the
    /// maximum is recomputed from the remaining components.
    ///
    /// # Returns
    ///
    /// The removed component, or `None` if nothing matched.
    pub fn remove(
        &mut self,
        amplitude: f64,
        frequency: f64,
        phase: f64,
    ) -> Option<SignalComponent> {
        let target = SignalComponent::new(amplitude, frequency, phase);
        let index = self.components.iter().position(|c| *c == target)?;
        let removed = self.components.remove(index);

        if removed.frequency == self.max_frequency {
            self.recompute_max_frequency();
        }
        debug!(
            frequency = removed.frequency,
            remaining = self.components.len(),
            max_frequency = self.max_frequency,
            "component removed"
        );
        Some(removed)
    }

    /// Rescans every component and resets the cached maximum frequency.
    ///
    /// # Returns
    ///
    /// The new maximum frequency (at least 1)
    pub fn recompute_max_frequency(&mut self) -> f64 {
        self.max_frequency = self
            .components
            .iter()
            .map(|c| c.frequency)
            .fold(MIN_MAX_FREQUENCY, f64::max);
        self.max_frequency
    }

    /// Removes every component and resets the maximum frequency to 1.
    pub fn clear(&mut self) {
        self.components.clear();
        self.max_frequency = MIN_MAX_FREQUENCY;
        debug!("registry cleared");
    }

    /// Components in insertion order.
    pub fn list(&self) -> &[SignalComponent] {
        &self.components
    }

    /// Iterates over the components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SignalComponent> {
        self.components.iter()
    }

    /// Largest component frequency, floored at 1.
    pub fn max_frequency(&self) -> f64 {
        self.max_frequency
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if there are no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for SignalRegistry {
    fn default() -> Self {
        Self {
            components: vec![SignalComponent::default()],
            max_frequency: MIN_MAX_FREQUENCY,
        }
    }
}
