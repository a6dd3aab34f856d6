pub mod mutate;
pub mod quality;
pub mod random;
pub mod reference;

use rand::Rng;

/// The given seed, or a fresh one from the thread-local generator.
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}
