//! Deterministic event-name generation for benchmarks.
//!
//! Names follow the common `topic:action` convention so map lookups see
//! realistic key lengths and distributions. A fixed seed keeps workloads
//! identical across runs.

use rand::{Rng, SeedableRng, distributions::Alphanumeric};
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 0x5eed_beac0;

/// Generates `count` distinct-looking event names from a fixed seed.
pub fn event_names(count: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..count).map(|_| random_name(&mut rng)).collect()
}

fn random_name(rng: &mut ChaCha8Rng) -> String {
    let topic = random_segment(rng, 8);
    let action = random_segment(rng, 6);
    format!("{topic}:{action}")
}

fn random_segment(rng: &mut ChaCha8Rng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
