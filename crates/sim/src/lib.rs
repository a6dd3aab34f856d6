//! # dnasim-sim
//!
//! Generates random point-mutation variants of short DNA sequences.
//! Substitutions favor transitions over transversions, CpG sites mutate at an
//! elevated rate, and every call returns the requested number of *distinct*
//! variants or a typed error.
//!
//! ```rust
//! use dnasim_sim::mutate;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let variants = mutate("atcgatcg", 0.1, 2, &mut rng).unwrap();
//! assert_eq!(variants.len(), 2);
//! assert!(variants.iter().all(|v| v.len() == 8));
//! ```

pub mod base;
pub mod config;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod provider;

pub use base::{Nucleotide, Sequence};
pub use errors::MutationError;
pub use evolution::{mutate, MutationEngine};
