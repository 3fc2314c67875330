use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::error::{NetError, Result};

/// Settings for [`fit`](super::fit).
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of forward/backward iterations.
    pub epochs: usize,
    /// Gradient descent step size.
    pub learning_rate: f32,
    /// Report the loss every this many epochs; `0` disables reports.
    pub log_every: usize,
    /// Seed for the generator returned by [`TrainConfig::rng`]; `None` draws
    /// from entropy. [`fit`](super::fit) trains already-built layers and never
    /// reads it.
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 100_000,
            learning_rate: 0.05,
            log_every: 1_000,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generator for layer initialization, reproducible when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(NetError::InvalidConfig("epochs must be positive".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::InvalidConfig(format!(
                "learning rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
