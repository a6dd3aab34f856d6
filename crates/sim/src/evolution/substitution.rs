//! Substitution model: which base replaces a base once a mutation fires.
//!
//! The model is a 4x4 weight matrix indexed by `Nucleotide::index()`
//! (A=0, C=1, G=2, T=3). Row `i` holds the relative weights of the three
//! possible replacements of base `i`; the diagonal is zero because a base
//! never "mutates" to itself. Weights do not need to sum to one, the sampler
//! normalizes each row over the three alternatives.
//!
//! Transitions (A <-> G, C <-> T) are biologically far more frequent than
//! transversions, and the reference table reflects that: the transition
//! partner of every base carries roughly 90% of the weight.

use crate::base::Nucleotide;
use crate::errors::MutationError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Empirical substitution weights observed in the human genome.
/// Rows/columns are ordered as [A, C, G, T].
const EMPIRICAL_WEIGHTS: [[f64; 4]; 4] = [
    // A -> [A, C, G, T]
    [0.0, 0.04, 0.92, 0.04],
    // C -> [A, C, G, T]
    [0.05, 0.0, 0.04, 0.91],
    // G -> [A, C, G, T]
    [0.89, 0.06, 0.0, 0.05],
    // T -> [A, C, G, T]
    [0.05, 0.90, 0.05, 0.0],
];

/// Immutable substitution weight table.
///
/// Construct one with [`SubstitutionModel::empirical`] for the reference
/// behavior, or with [`SubstitutionModel::uniform`] /
/// [`SubstitutionModel::transition_biased`] / [`SubstitutionModel::new`] when
/// a test or an experiment needs a different model. The value is cheap to
/// clone and safe to share between threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[[f64; 4]; 4]", into = "[[f64; 4]; 4]")]
pub struct SubstitutionModel {
    weights: [[f64; 4]; 4],

    /// Row totals, cached for sampling.
    totals: [f64; 4],
}

impl SubstitutionModel {
    /// Create a model from a raw weight matrix.
    ///
    /// # Errors
    /// Returns `MutationError::InvalidModel` if:
    /// - any weight is negative, NaN or infinite
    /// - the diagonal is not zero
    /// - a row has no positive weight (the base could never be replaced)
    pub fn new(weights: [[f64; 4]; 4]) -> Result<Self, MutationError> {
        let mut totals = [0.0; 4];

        for (i, row) in weights.iter().enumerate() {
            let from = Nucleotide::ALL[i];
            if row[i] != 0.0 {
                return Err(MutationError::InvalidModel(format!(
                    "diagonal weight for {from} must be 0, got {}",
                    row[i]
                )));
            }
            for (j, &w) in row.iter().enumerate() {
                if !w.is_finite() || w < 0.0 {
                    return Err(MutationError::InvalidModel(format!(
                        "weight {from}->{} must be a non-negative number, got {w}",
                        Nucleotide::ALL[j]
                    )));
                }
            }
            totals[i] = row.iter().sum();
            if totals[i] <= 0.0 {
                return Err(MutationError::InvalidModel(format!(
                    "no replacement weight for {from}"
                )));
            }
        }

        Ok(Self { weights, totals })
    }

    /// The reference model: empirical human-genome substitution weights.
    pub fn empirical() -> Self {
        Self::from_trusted(EMPIRICAL_WEIGHTS)
    }

    /// Every replacement equally likely (Jukes-Cantor style).
    pub fn uniform() -> Self {
        let mut weights = [[1.0; 4]; 4];
        for (i, row) in weights.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        Self::from_trusted(weights)
    }

    /// Transitions weighted `kappa`, each transversion weighted 1.
    ///
    /// With `kappa = 2` a replacement is a transition half the time.
    pub fn transition_biased(kappa: f64) -> Result<Self, MutationError> {
        if !kappa.is_finite() || kappa < 0.0 {
            return Err(MutationError::InvalidModel(format!(
                "transition weight must be a non-negative number, got {kappa}"
            )));
        }

        let mut weights = [[0.0; 4]; 4];
        for from in Nucleotide::ALL {
            for to in from.alternatives() {
                weights[from.index()][to.index()] =
                    if from.is_transition_to(to) { kappa } else { 1.0 };
            }
        }
        Self::new(weights)
    }

    fn from_trusted(weights: [[f64; 4]; 4]) -> Self {
        let mut totals = [0.0; 4];
        for (total, row) in totals.iter_mut().zip(weights.iter()) {
            *total = row.iter().sum();
        }
        Self { weights, totals }
    }

    /// Raw weight of the substitution `from -> to` (0 when `from == to`).
    #[inline]
    pub fn weight(&self, from: Nucleotide, to: Nucleotide) -> f64 {
        self.weights[from.index()][to.index()]
    }

    /// Probability that a mutated `from` becomes `to`, normalized over the
    /// three alternatives.
    #[inline]
    pub fn probability(&self, from: Nucleotide, to: Nucleotide) -> f64 {
        self.weight(from, to) / self.totals[from.index()]
    }

    /// The full weight matrix, rows/columns ordered [A, C, G, T].
    pub fn weights(&self) -> [[f64; 4]; 4] {
        self.weights
    }

    /// Draw the replacement for `from`. Never returns `from` itself.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, from: Nucleotide, rng: &mut R) -> Nucleotide {
        let row = &self.weights[from.index()];
        let targets = from.alternatives();
        let r = rng.random::<f64>() * self.totals[from.index()];

        // Select target based on cumulative weights
        let mut cumulative = 0.0;
        for &target in &targets {
            cumulative += row[target.index()];
            if r < cumulative {
                return target;
            }
        }

        // Rounding left r at the row total: take the last reachable target.
        targets
            .iter()
            .rev()
            .copied()
            .find(|t| row[t.index()] > 0.0)
            .unwrap_or(targets[2])
    }
}

impl Default for SubstitutionModel {
    fn default() -> Self {
        Self::empirical()
    }
}

impl TryFrom<[[f64; 4]; 4]> for SubstitutionModel {
    type Error = MutationError;

    fn try_from(weights: [[f64; 4]; 4]) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<SubstitutionModel> for [[f64; 4]; 4] {
    fn from(model: SubstitutionModel) -> Self {
        model.weights
    }
}
