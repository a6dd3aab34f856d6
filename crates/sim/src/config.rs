//! Engine configuration.
//!
//! An [`EngineConfig`] can be deserialized from JSON to reproduce an engine
//! setup exactly. Every field is optional in the file and falls back to the
//! reference model.
//!
//! ```json
//! {
//!   "attempts_per_variant": 200,
//!   "cpg_multiplier": 5.0,
//!   "substitution": { "TransitionBiased": { "kappa": 4.0 } }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::evolution::{
    ContextModel, MutationEngine, SubstitutionModel, CPG_MULTIPLIER, DEFAULT_ATTEMPTS_PER_VARIANT,
};

/// Which substitution model the engine samples replacements from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum SubstitutionConfig {
    /// Empirical human-genome weights
    #[default]
    Empirical,
    /// All replacements equally likely
    Uniform,
    /// Transitions weighted `kappa`, transversions weighted 1
    TransitionBiased { kappa: f64 },
    /// Explicit weight matrix, rows/columns ordered [A, C, G, T]
    Custom { matrix: [[f64; 4]; 4] },
}

impl SubstitutionConfig {
    pub fn build(&self) -> Result<SubstitutionModel, ConfigError> {
        let model = match self {
            Self::Empirical => SubstitutionModel::empirical(),
            Self::Uniform => SubstitutionModel::uniform(),
            Self::TransitionBiased { kappa } => SubstitutionModel::transition_biased(*kappa)?,
            Self::Custom { matrix } => SubstitutionModel::new(*matrix)?,
        };
        Ok(model)
    }
}

/// Serializable description of a [`MutationEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Candidate draws allowed per requested variant
    pub attempts_per_variant: usize,
    /// Rate multiplier at CpG sites
    pub cpg_multiplier: f64,
    /// Replacement-base model
    pub substitution: SubstitutionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            attempts_per_variant: DEFAULT_ATTEMPTS_PER_VARIANT,
            cpg_multiplier: CPG_MULTIPLIER,
            substitution: SubstitutionConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration and build the engine it describes.
    pub fn build(&self) -> Result<MutationEngine, ConfigError> {
        let substitution = self.substitution.build()?;
        let context = ContextModel::new(self.cpg_multiplier)?;
        let engine = MutationEngine::new(substitution, context)
            .with_attempts_per_variant(self.attempts_per_variant)?;
        log::debug!(
            "Built engine: attempts_per_variant={}, cpg_multiplier={}, substitution={:?}",
            self.attempts_per_variant,
            self.cpg_multiplier,
            self.substitution
        );
        Ok(engine)
    }
}
