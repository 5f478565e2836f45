//! Synthetic sample generators standing in for a backend.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Produces the next batch of samples for the dataset.
pub trait DataSource {
    /// Generate `count` samples that follow the `already_loaded` existing ones.
    fn fetch(&mut self, already_loaded: usize, count: usize) -> Vec<f64>;
}

/// How synthetic samples are generated
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    #[default]
    #[display(fmt = "sequential")]
    #[strum(serialize = "sequential")]
    Sequential,
    #[display(fmt = "random")]
    #[strum(serialize = "random")]
    Random,
}

/// Sample `i` (0-based, dataset-wide) has value `i + 1`.
#[derive(Debug, Clone, Default)]
pub struct SequentialSource;

impl DataSource for SequentialSource {
    fn fetch(&mut self, already_loaded: usize, count: usize) -> Vec<f64> {
        (already_loaded..already_loaded + count).map(|i| (i + 1) as f64).collect()
    }
}

/// Uniform samples in `[0, scale)` from an injectable generator.
pub struct RandomSource {
    scale: f64,
    next_unit: Box<dyn FnMut() -> f64>,
}

impl RandomSource {
    pub fn new(scale: f64, next_unit: impl FnMut() -> f64 + 'static) -> Self {
        Self { scale, next_unit: Box::new(next_unit) }
    }

    /// Backed by `Math.random()`; only usable inside a JS runtime.
    pub fn browser(scale: f64) -> Self {
        Self::new(scale, js_sys::Math::random)
    }
}

impl DataSource for RandomSource {
    fn fetch(&mut self, _already_loaded: usize, count: usize) -> Vec<f64> {
        (0..count).map(|_| ((self.next_unit)() * self.scale).floor()).collect()
    }
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSource").field("scale", &self.scale).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_continues_after_loaded_samples() {
        let mut source = SequentialSource;
        assert_eq!(source.fetch(0, 3), vec![1.0, 2.0, 3.0]);
        assert_eq!(source.fetch(1000, 2), vec![1001.0, 1002.0]);
    }

    #[test]
    fn random_source_scales_generator_output() {
        let mut source = RandomSource::new(100.0, || 0.255);
        assert_eq!(source.fetch(0, 2), vec![25.0, 25.0]);
    }

    #[test]
    fn data_mode_parses_from_str() {
        assert_eq!("random".parse::<DataMode>(), Ok(DataMode::Random));
        assert!("noise".parse::<DataMode>().is_err());
    }
}
