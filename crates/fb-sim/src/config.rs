//! Simulation configuration.

use crate::{SimError, SimResult};

/// Randomized per-delivery delay, modelled as extra distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayConfig {
    /// Chance that any single delivery is delayed.
    pub probability: f64,
    /// Inclusive bounds of the extra distance added to a delayed delivery.
    pub min_extra:   f64,
    pub max_extra:   f64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            probability: 0.2,
            min_extra:   1.0,
            max_extra:   5.0,
        }
    }
}

/// Inputs that control a [`DeliverySim`][crate::DeliverySim] run.
///
/// | Field   | Meaning                                                    |
/// |---------|------------------------------------------------------------|
/// | `delay` | `None` disables delays; the run is then fully deterministic |
/// | `seed`  | `Some` seeds the delay draws; `None` uses OS entropy        |
///
/// The default is deterministic (no delays).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimConfig {
    pub delay: Option<DelayConfig>,
    pub seed:  Option<u64>,
}

impl SimConfig {
    /// No delays; identical input always gives identical stats.
    pub fn deterministic() -> Self {
        Self::default()
    }

    /// Default delays, seeded when `seed` is `Some`.
    pub fn with_delay(seed: Option<u64>) -> Self {
        Self {
            delay: Some(DelayConfig::default()),
            seed,
        }
    }

    pub fn delay_enabled(&self) -> bool {
        self.delay.is_some()
    }

    pub fn validate(&self) -> SimResult<()> {
        let Some(d) = self.delay else {
            return Ok(());
        };
        if !(0.0..=1.0).contains(&d.probability) {
            return Err(SimError::Config(format!(
                "delay probability {} is outside [0, 1]",
                d.probability
            )));
        }
        if !d.min_extra.is_finite() || !d.max_extra.is_finite() || d.min_extra < 0.0 {
            return Err(SimError::Config(format!(
                "delay extras must be finite and non-negative (got {}..={})",
                d.min_extra, d.max_extra
            )));
        }
        if d.min_extra > d.max_extra {
            return Err(SimError::Config(format!(
                "delay min_extra {} exceeds max_extra {}",
                d.min_extra, d.max_extra
            )));
        }
        Ok(())
    }
}
