//! The mutation engine.
//!
//! Given a sequence, a base per-position mutation rate and a variant count,
//! the engine produces that many *distinct* mutated copies of the sequence.
//! Each candidate is built by walking the sequence once: every position
//! mutates independently with its contextual rate (see [`ContextModel`]) and,
//! when it does, the replacement base is drawn from the
//! [`SubstitutionModel`]. Candidates that duplicate an already accepted
//! variant are discarded. A request for more variants than there are
//! strings of the input's length fails at once; otherwise generation stops after
//! `n_variants * attempts_per_variant` candidates; running out of budget is
//! reported as [`MutationError::UniquenessExhausted`] rather than silently
//! raising the caller's rate.
//!
//! The engine owns no random state. Callers pass the RNG explicitly, so a
//! seeded generator reproduces the exact same variants in the same order.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use super::context::ContextModel;
use super::substitution::SubstitutionModel;
use crate::base::Sequence;
use crate::errors::MutationError;

/// Default number of candidate draws allowed per requested variant.
pub const DEFAULT_ATTEMPTS_PER_VARIANT: usize = 100;

/// Upper bound on the storage reserved before any variant is drawn.
const MAX_RESERVED_VARIANTS: usize = 1024;

/// Number of distinct DNA strings of length `len` (4^len), saturating.
fn distinct_sequences(len: usize) -> usize {
    u32::try_from(len)
        .ok()
        .and_then(|exp| 4usize.checked_pow(exp))
        .unwrap_or(usize::MAX)
}

/// Point-mutation variant generator.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationEngine {
    substitution: SubstitutionModel,
    context: ContextModel,
    attempts_per_variant: usize,
}

impl MutationEngine {
    /// Create an engine from explicit models, with the default attempt budget.
    pub fn new(substitution: SubstitutionModel, context: ContextModel) -> Self {
        Self {
            substitution,
            context,
            attempts_per_variant: DEFAULT_ATTEMPTS_PER_VARIANT,
        }
    }

    /// Set how many candidates may be drawn per requested variant.
    pub fn with_attempts_per_variant(mut self, attempts: usize) -> Result<Self, MutationError> {
        if attempts == 0 {
            return Err(MutationError::InvalidModel(
                "attempts per variant must be at least 1".to_string(),
            ));
        }
        self.attempts_per_variant = attempts;
        Ok(self)
    }

    pub fn substitution(&self) -> &SubstitutionModel {
        &self.substitution
    }

    pub fn context(&self) -> &ContextModel {
        &self.context
    }

    pub fn attempts_per_variant(&self) -> usize {
        self.attempts_per_variant
    }

    /// Total candidate budget for a request of `n_variants`.
    #[inline]
    pub fn attempt_budget(&self, n_variants: usize) -> usize {
        n_variants.saturating_mul(self.attempts_per_variant)
    }

    /// Generate `n_variants` distinct mutated copies of `sequence`.
    ///
    /// `sequence` is case-insensitive; variants are returned in uppercase.
    /// An empty sequence yields an empty list without any further checks.
    /// A rate of exactly 0 yields `n_variants` copies of the canonical input,
    /// since distinct variants cannot exist in that case.
    ///
    /// # Errors
    /// - `InvalidAlphabet` if `sequence` has symbols outside A/C/G/T
    /// - `InvalidRate` if `rate` is outside [0, 1] or NaN
    /// - `InvalidVariantCount` if `n_variants` is 0
    /// - `UniquenessExhausted` if the attempt budget ran out
    ///
    /// ```rust
    /// use dnasim_sim::evolution::MutationEngine;
    /// use rand::SeedableRng;
    /// use rand_xoshiro::Xoshiro256PlusPlus;
    ///
    /// let engine = MutationEngine::default();
    /// let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    /// let variants = engine.mutate("ATCG", 0.5, 3, &mut rng).unwrap();
    /// assert_eq!(variants.len(), 3);
    /// ```
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        sequence: &str,
        rate: f64,
        n_variants: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, MutationError> {
        if sequence.is_empty() {
            return Ok(Vec::new());
        }

        let original = Sequence::parse_canonical(sequence)?;
        let variants = self.mutate_sequence(&original, rate, n_variants, rng)?;
        Ok(variants.iter().map(Sequence::to_string).collect())
    }

    /// Typed counterpart of [`MutationEngine::mutate`] for callers that
    /// already hold a parsed `Sequence`.
    pub fn mutate_sequence<R: Rng + ?Sized>(
        &self,
        original: &Sequence,
        rate: f64,
        n_variants: usize,
        rng: &mut R,
    ) -> Result<Vec<Sequence>, MutationError> {
        if original.is_empty() {
            return Ok(Vec::new());
        }
        validate_rate(rate)?;
        if n_variants < 1 {
            return Err(MutationError::InvalidVariantCount(n_variants));
        }

        if rate == 0.0 {
            return Ok(vec![original.clone(); n_variants]);
        }

        let possible = distinct_sequences(original.len());
        if n_variants > possible {
            warn!(
                "Requested {n_variants} distinct variants but only {possible} sequences of length {} exist",
                original.len()
            );
            return Err(MutationError::UniquenessExhausted {
                requested: n_variants,
                generated: 0,
                attempts: 0,
            });
        }

        let budget = self.attempt_budget(n_variants);
        let reserve = n_variants.min(MAX_RESERVED_VARIANTS);
        let mut seen: HashSet<Sequence> = HashSet::with_capacity(reserve);
        let mut variants = Vec::with_capacity(reserve);
        let mut attempts = 0;

        while variants.len() < n_variants && attempts < budget {
            let candidate = self.mutate_once(original, rate, rng);
            attempts += 1;
            if !seen.contains(&candidate) {
                seen.insert(candidate.clone());
                variants.push(candidate);
            }
        }

        if variants.len() < n_variants {
            warn!(
                "Attempt budget exhausted: {} of {} distinct variants after {} attempts (len={}, rate={})",
                variants.len(),
                n_variants,
                attempts,
                original.len(),
                rate
            );
            return Err(MutationError::UniquenessExhausted {
                requested: n_variants,
                generated: variants.len(),
                attempts,
            });
        }

        debug!(
            "Generated {n_variants} distinct variants in {attempts}/{budget} attempts (len={}, rate={rate})",
            original.len()
        );
        Ok(variants)
    }

    /// Build a single candidate variant of `original`.
    ///
    /// Every position is tested against its contextual rate, which is always
    /// computed on the unmutated input.
    pub fn mutate_once<R: Rng + ?Sized>(
        &self,
        original: &Sequence,
        rate: f64,
        rng: &mut R,
    ) -> Sequence {
        let mut variant = original.clone();

        for (i, slot) in variant.as_mut_slice().iter_mut().enumerate() {
            let contextual_rate = self.context.rate_at(original, i, rate);
            if rng.random::<f64>() < contextual_rate {
                *slot = self.substitution.sample(*slot, rng);
            }
        }

        variant
    }
}

impl Default for MutationEngine {
    fn default() -> Self {
        Self::new(SubstitutionModel::empirical(), ContextModel::default())
    }
}

/// Check that a base mutation rate is a probability.
pub fn validate_rate(rate: f64) -> Result<(), MutationError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(MutationError::InvalidRate(rate))
    }
}

/// Generate `n_variants` distinct variants with the reference engine.
///
/// Shorthand for `MutationEngine::default().mutate(...)`.
pub fn mutate<R: Rng + ?Sized>(
    sequence: &str,
    rate: f64,
    n_variants: usize,
    rng: &mut R,
) -> Result<Vec<String>, MutationError> {
    MutationEngine::default().mutate(sequence, rate, n_variants, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn rng(seed: u64) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    }

    fn is_dna(s: &str) -> bool {
        s.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T'))
    }

    #[test]
    fn test_mutate_shape() {
        let engine = MutationEngine::default();
        let variants = engine.mutate("ATGCATGCAT", 0.2, 5, &mut rng(42)).unwrap();
        assert_eq!(variants.len(), 5);
        for v in &variants {
            assert_eq!(v.len(), 10);
            assert!(is_dna(v));
        }
    }

    #[test]
    fn test_mutate_default_single_variant() {
        let variants = mutate("ATGC", 0.01, 1, &mut rng(1)).unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].len(), 4);
    }

    #[test]
    fn test_empty_sequence_short_circuits() {
        let engine = MutationEngine::default();
        assert!(engine.mutate("", 0.5, 3, &mut rng(1)).unwrap().is_empty());
        // Even parameters that would otherwise be rejected
        assert!(engine.mutate("", 7.0, 0, &mut rng(1)).unwrap().is_empty());
    }

    #[test]
    fn test_zero_rate_returns_copies() {
        let engine = MutationEngine::default();
        let variants = engine.mutate("atgcATGC", 0.0, 5, &mut rng(9)).unwrap();
        assert_eq!(variants, vec!["ATGCATGC".to_string(); 5]);
    }

    #[test]
    fn test_full_rate_changes_every_base() {
        let engine = MutationEngine::default();
        let mut r = rng(5);
        for _ in 0..50 {
            let variant = &engine.mutate("ATGC", 1.0, 1, &mut r).unwrap()[0];
            let mismatches = variant
                .chars()
                .zip("ATGC".chars())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(mismatches, 4, "{variant}");
        }
    }

    #[test]
    fn test_variants_are_distinct() {
        let engine = MutationEngine::default();
        let variants = engine.mutate("ATCG", 0.5, 3, &mut rng(11)).unwrap();
        let unique: BTreeSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), 3);
        for v in &variants {
            assert_eq!(v.len(), 4);
            assert!(is_dna(v));
        }
    }

    #[test]
    fn test_invalid_alphabet() {
        let err = mutate("ATGX", 0.01, 1, &mut rng(1)).unwrap_err();
        assert_eq!(err, MutationError::InvalidAlphabet(BTreeSet::from(['X'])));
    }

    #[test]
    fn test_invalid_alphabet_checked_before_rate() {
        let err = mutate("ANGX", 2.0, 0, &mut rng(1)).unwrap_err();
        assert_eq!(
            err,
            MutationError::InvalidAlphabet(BTreeSet::from(['N', 'X']))
        );
    }

    #[test]
    fn test_invalid_rate() {
        assert_eq!(
            mutate("ATGC", 1.5, 1, &mut rng(1)).unwrap_err(),
            MutationError::InvalidRate(1.5)
        );
        assert!(matches!(
            mutate("ATGC", -0.1, 1, &mut rng(1)),
            Err(MutationError::InvalidRate(_))
        ));
        assert!(matches!(
            mutate("ATGC", f64::NAN, 1, &mut rng(1)),
            Err(MutationError::InvalidRate(_))
        ));
    }

    #[test]
    fn test_invalid_variant_count() {
        assert_eq!(
            mutate("ATGC", 0.01, 0, &mut rng(1)).unwrap_err(),
            MutationError::InvalidVariantCount(0)
        );
    }

    #[test]
    fn test_case_insensitive() {
        let lower = mutate("atgc", 0.3, 2, &mut rng(77)).unwrap();
        let upper = mutate("ATGC", 0.3, 2, &mut rng(77)).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_same_seed_same_output() {
        let engine = MutationEngine::default();
        let a = engine.mutate("ACGTACGTACGT", 0.25, 4, &mut rng(123)).unwrap();
        let b = engine.mutate("ACGTACGTACGT", 0.25, 4, &mut rng(123)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniqueness_exhausted() {
        // A single base at rate 1 can only become one of three others.
        let engine = MutationEngine::default();
        let err = engine.mutate("A", 1.0, 4, &mut rng(2)).unwrap_err();
        match err {
            MutationError::UniquenessExhausted {
                requested,
                generated,
                attempts,
            } => {
                assert_eq!(requested, 4);
                assert!(generated <= 3);
                assert_eq!(attempts, 400);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_impossible_count_fails_fast() {
        let engine = MutationEngine::default();
        let err = engine
            .mutate("ACGT", 1.0, usize::MAX / 2, &mut rng(3))
            .unwrap_err();
        assert_eq!(
            err,
            MutationError::UniquenessExhausted {
                requested: usize::MAX / 2,
                generated: 0,
                attempts: 0,
            }
        );

        // 4^2 = 16 strings of length 2
        let err = engine.mutate("AC", 0.5, 17, &mut rng(3)).unwrap_err();
        assert!(matches!(
            err,
            MutationError::UniquenessExhausted { attempts: 0, .. }
        ));
    }

    #[test]
    fn test_distinct_sequences_saturates() {
        assert_eq!(distinct_sequences(0), 1);
        assert_eq!(distinct_sequences(3), 64);
        assert_eq!(distinct_sequences(100), usize::MAX);
        assert_eq!(distinct_sequences(10_000), usize::MAX);
    }

    #[test]
    fn test_attempt_budget_configurable() {
        let engine = MutationEngine::default().with_attempts_per_variant(3).unwrap();
        assert_eq!(engine.attempt_budget(4), 12);
        assert_eq!(engine.attempt_budget(usize::MAX), usize::MAX);
        assert!(MutationEngine::default().with_attempts_per_variant(0).is_err());

        let err = engine.mutate("A", 1.0, 4, &mut rng(2)).unwrap_err();
        assert!(matches!(
            err,
            MutationError::UniquenessExhausted { attempts: 12, .. }
        ));
    }

    #[test]
    fn test_injected_model_is_used() {
        // Only transitions allowed: A can only become G.
        let mut weights = [[0.0; 4]; 4];
        for base in crate::base::Nucleotide::ALL {
            weights[base.index()][base.transition_partner().index()] = 1.0;
        }
        let engine = MutationEngine::new(
            SubstitutionModel::new(weights).unwrap(),
            ContextModel::neutral(),
        );
        let variants = engine.mutate("AAAA", 1.0, 1, &mut rng(4)).unwrap();
        assert_eq!(variants, vec!["GGGG".to_string()]);
    }

    #[test]
    fn test_mutate_once_rate_statistics() {
        let engine = MutationEngine::new(SubstitutionModel::empirical(), ContextModel::neutral());
        let original = Sequence::from_str(&"ATGA".repeat(50)).unwrap();
        let mut r = rng(99);
        let trials = 200;
        let total: usize = (0..trials)
            .map(|_| engine.mutate_once(&original, 0.5, &mut r).mismatches(&original))
            .sum();
        let fraction = total as f64 / (trials * original.len()) as f64;
        assert!((fraction - 0.5).abs() < 0.02, "mismatch fraction {fraction}");
    }

    #[test]
    fn test_cpg_site_mutates_more_often() {
        let engine = MutationEngine::default();
        let original = Sequence::from_str("ACGA").unwrap();
        let mut r = rng(31);
        let (mut c_hits, mut a_hits) = (0, 0);
        for _ in 0..5_000 {
            let v = engine.mutate_once(&original, 0.05, &mut r);
            if v.get(1) != original.get(1) {
                c_hits += 1;
            }
            if v.get(0) != original.get(0) {
                a_hits += 1;
            }
        }
        assert!(c_hits > a_hits * 5, "cpg={c_hits} other={a_hits}");
    }

    #[test]
    fn test_validate_rate_bounds() {
        assert!(validate_rate(0.0).is_ok());
        assert!(validate_rate(1.0).is_ok());
        assert!(validate_rate(1.0 + f64::EPSILON).is_err());
    }
}
