//! The mutation engine and the models it is built from.
//!
//! - **Substitution**: which base replaces a mutated base (transition bias)
//! - **Context**: per-position rate adjustment (CpG hotspots)
//! - **Engine**: distinct-variant generation under a bounded attempt budget

pub mod context;
pub mod engine;
pub mod substitution;

pub use context::{ContextModel, CPG_MULTIPLIER};
pub use engine::{mutate, validate_rate, MutationEngine, DEFAULT_ATTEMPTS_PER_VARIANT};
pub use substitution::SubstitutionModel;
