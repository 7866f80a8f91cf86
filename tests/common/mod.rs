//! Common test utilities and data generators.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded generator so every run sees the same data.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n` uniform values in `[-scale, scale)`.
pub fn uniform_data(rng: &mut StdRng, n: usize, scale: f64) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(-scale..scale)).collect()
}

/// A shuffled copy of `data`.
pub fn shuffled(rng: &mut StdRng, data: &[f64]) -> Vec<f64> {
    let mut copy = data.to_vec();
    copy.shuffle(rng);
    copy
}
