//! Sequence-context adjustment of the per-base mutation rate.
//!
//! Methylated cytosines in CpG dinucleotides deaminate far more often than
//! other bases, so the C of every CpG site mutates at a multiple of the base
//! rate.

use serde::{Deserialize, Serialize};

use crate::base::Sequence;
use crate::errors::MutationError;

/// Rate multiplier applied at CpG sites in the reference model.
pub const CPG_MULTIPLIER: f64 = 10.0;

/// Maps (sequence, position, base rate) to the contextual rate.
///
/// Serialized as `{ "cpg_multiplier": <f64> }`; deserialization applies the
/// same checks as [`ContextModel::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContextModel", into = "RawContextModel")]
pub struct ContextModel {
    cpg_multiplier: f64,
}

impl ContextModel {
    /// Create a context model with the given CpG multiplier.
    pub fn new(cpg_multiplier: f64) -> Result<Self, MutationError> {
        if !cpg_multiplier.is_finite() || cpg_multiplier < 0.0 {
            return Err(MutationError::InvalidModel(format!(
                "CpG multiplier must be a non-negative number, got {cpg_multiplier}"
            )));
        }
        Ok(Self { cpg_multiplier })
    }

    /// No context effect: every position uses the base rate.
    pub fn neutral() -> Self {
        Self { cpg_multiplier: 1.0 }
    }

    pub fn cpg_multiplier(&self) -> f64 {
        self.cpg_multiplier
    }

    /// Effective mutation probability at `position`, clamped to 1.
    #[inline]
    pub fn rate_at(&self, sequence: &Sequence, position: usize, base_rate: f64) -> f64 {
        if sequence.is_cpg_site(position) {
            (base_rate * self.cpg_multiplier).min(1.0)
        } else {
            base_rate
        }
    }
}

impl Default for ContextModel {
    fn default() -> Self {
        Self {
            cpg_multiplier: CPG_MULTIPLIER,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawContextModel {
    cpg_multiplier: f64,
}

impl TryFrom<RawContextModel> for ContextModel {
    type Error = MutationError;

    fn try_from(raw: RawContextModel) -> Result<Self, Self::Error> {
        Self::new(raw.cpg_multiplier)
    }
}

impl From<ContextModel> for RawContextModel {
    fn from(model: ContextModel) -> Self {
        Self {
            cpg_multiplier: model.cpg_multiplier,
        }
    }
}
