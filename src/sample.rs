//! Random input arrays for the visualizer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::InputConfig;

/// Uniform sampler producing fixed-size arrays of positive values.
#[derive(Debug, Clone)]
pub struct InputSampler {
    rng: StdRng,
    size: usize,
    min_value: i64,
    max_value: i64,
}

impl InputSampler {
    /// Create a sampler. With `seed`, the sequence of arrays is reproducible.
    pub fn new(input: &InputConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            size: input.array_size,
            min_value: input.min_value,
            max_value: input.max_value.max(input.min_value),
        }
    }

    /// Draw the next array.
    pub fn sample(&mut self) -> Vec<i64> {
        let (min, max) = (self.min_value, self.max_value);
        (0..self.size)
            .map(|_| self.rng.random_range(min..=max))
            .collect()
    }

    /// Largest value this sampler can produce.
    pub fn max_value(&self) -> i64 {
        self.max_value
    }
}
