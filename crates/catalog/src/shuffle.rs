//! Seedable shuffling for listing diversity
//!
//! Production callers seed from entropy; tests pass a fixed seed so the
//! resulting order is reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shuffle `items` in place using `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// RNG for production use, seeded from OS entropy
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Deterministic RNG for reproducible listings
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
