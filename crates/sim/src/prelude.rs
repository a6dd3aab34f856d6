//! Commonly used imports for convenience.
//!
//! ```
//! use dnasim_sim::prelude::*;
//! use std::str::FromStr;
//!
//! let seq = Sequence::from_str("ACGT").unwrap();
//! assert!(seq.is_cpg_site(1));
//! ```

pub use crate::base::{Nucleotide, Sequence};
pub use crate::config::{EngineConfig, SubstitutionConfig};
pub use crate::errors::{ConfigError, MutationError, ProviderError};
pub use crate::evolution::{mutate, ContextModel, MutationEngine, SubstitutionModel};
