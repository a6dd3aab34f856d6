//! Mutation statistics
//!
//! Positional comparison of each variant against the original sequence.
//! Sequences are compared base by base over their common length; the engine
//! always produces variants of the original's length, so in practice this is
//! the whole sequence.

use std::collections::BTreeMap;

use dnasim_sim::Nucleotide;
use serde::Serialize;

/// One substituted position in one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationRecord {
    /// Variant number, starting at 1
    pub variant: usize,
    /// Position in the sequence, starting at 0
    pub position: usize,
    pub original: char,
    pub mutated: char,
}

/// Transition or transversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubstitutionKind {
    Transition,
    Transversion,
}

impl SubstitutionKind {
    /// Classify `from -> to`. Returns `None` for identical bases or symbols
    /// outside the DNA alphabet.
    pub fn classify(from: char, to: char) -> Option<Self> {
        let from = Nucleotide::from_char(from)?;
        let to = Nucleotide::from_char(to)?;
        if from == to {
            None
        } else if from.is_transition_to(to) {
            Some(Self::Transition)
        } else {
            Some(Self::Transversion)
        }
    }
}

/// Aggregate statistics over a set of variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MutationStats {
    /// Number of substituted positions in each variant, in variant order
    pub mutation_counts: Vec<usize>,
    /// Position -> number of variants mutated there
    pub position_frequency: BTreeMap<usize, usize>,
    /// "X->Y" -> number of occurrences across all variants
    pub substitutions: BTreeMap<String, usize>,
}

impl MutationStats {
    pub fn total_mutations(&self) -> usize {
        self.mutation_counts.iter().sum()
    }

    /// Mean substitutions per variant (0 for no variants).
    pub fn mean_mutations(&self) -> f64 {
        if self.mutation_counts.is_empty() {
            return 0.0;
        }
        self.total_mutations() as f64 / self.mutation_counts.len() as f64
    }

    /// Histogram of per-variant mutation counts: count -> number of variants.
    pub fn count_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for &count in &self.mutation_counts {
            *histogram.entry(count).or_insert(0) += 1;
        }
        histogram
    }

    pub fn transitions(&self) -> usize {
        self.count_kind(SubstitutionKind::Transition)
    }

    pub fn transversions(&self) -> usize {
        self.count_kind(SubstitutionKind::Transversion)
    }

    /// Transition/transversion ratio, `None` when there are no transversions.
    pub fn ti_tv_ratio(&self) -> Option<f64> {
        let tv = self.transversions();
        (tv > 0).then(|| self.transitions() as f64 / tv as f64)
    }

    fn count_kind(&self, kind: SubstitutionKind) -> usize {
        self.substitutions
            .iter()
            .filter(|(key, _)| {
                let mut chars = key.chars();
                let from = chars.next();
                let to = chars.last();
                matches!((from, to), (Some(f), Some(t)) if SubstitutionKind::classify(f, t) == Some(kind))
            })
            .map(|(_, &n)| n)
            .sum()
    }
}

/// Every substituted position of every variant, in variant then position
/// order.
pub fn mutation_records<S: AsRef<str>>(original: &str, variants: &[S]) -> Vec<MutationRecord> {
    variants
        .iter()
        .enumerate()
        .flat_map(|(i, variant)| {
            original
                .chars()
                .zip(variant.as_ref().chars())
                .enumerate()
                .filter(|(_, (o, m))| o != m)
                .map(move |(position, (original, mutated))| MutationRecord {
                    variant: i + 1,
                    position,
                    original,
                    mutated,
                })
        })
        .collect()
}

/// Summarize substitution patterns across `variants`.
pub fn analyze_mutations<S: AsRef<str>>(original: &str, variants: &[S]) -> MutationStats {
    let mut stats = MutationStats::default();

    for variant in variants {
        let mut mutations = 0;
        for (pos, (orig, mutated)) in original.chars().zip(variant.as_ref().chars()).enumerate() {
            if orig != mutated {
                mutations += 1;
                *stats.position_frequency.entry(pos).or_insert(0) += 1;
                *stats
                    .substitutions
                    .entry(format!("{orig}->{mutated}"))
                    .or_insert(0) += 1;
            }
        }
        stats.mutation_counts.push(mutations);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_records() {
        let records = mutation_records("ATGC", &["ATGC", "GTGA"]);
        assert_eq!(
            records,
            vec![
                MutationRecord {
                    variant: 2,
                    position: 0,
                    original: 'A',
                    mutated: 'G'
                },
                MutationRecord {
                    variant: 2,
                    position: 3,
                    original: 'C',
                    mutated: 'A'
                },
            ]
        );
    }

    #[test]
    fn test_analyze_mutations() {
        let stats = analyze_mutations("ATGC", &["GTGC", "GTGA", "ATGC"]);
        assert_eq!(stats.mutation_counts, vec![1, 2, 0]);
        assert_eq!(stats.position_frequency[&0], 2);
        assert_eq!(stats.position_frequency[&3], 1);
        assert!(!stats.position_frequency.contains_key(&1));
        assert_eq!(stats.substitutions["A->G"], 2);
        assert_eq!(stats.substitutions["C->A"], 1);
        assert_eq!(stats.total_mutations(), 3);
        assert!((stats.mean_mutations() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_count_histogram() {
        let stats = analyze_mutations("AAAA", &["AAAA", "GAAA", "GGAA", "GAAG"]);
        let histogram = stats.count_histogram();
        assert_eq!(histogram[&0], 1);
        assert_eq!(histogram[&1], 1);
        assert_eq!(histogram[&2], 2);
    }

    #[test]
    fn test_ti_tv() {
        // A->G and C->T transitions, A->C transversion
        let stats = analyze_mutations("ACA", &["GTC"]);
        assert_eq!(stats.transitions(), 2);
        assert_eq!(stats.transversions(), 1);
        assert_eq!(stats.ti_tv_ratio(), Some(2.0));

        let only_ti = analyze_mutations("A", &["G"]);
        assert_eq!(only_ti.ti_tv_ratio(), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            SubstitutionKind::classify('c', 'T'),
            Some(SubstitutionKind::Transition)
        );
        assert_eq!(
            SubstitutionKind::classify('G', 'T'),
            Some(SubstitutionKind::Transversion)
        );
        assert_eq!(SubstitutionKind::classify('A', 'A'), None);
        assert_eq!(SubstitutionKind::classify('A', 'N'), None);
    }

    #[test]
    fn test_empty_variants() {
        let stats = analyze_mutations::<&str>("ACGT", &[]);
        assert!(stats.mutation_counts.is_empty());
        assert_eq!(stats.mean_mutations(), 0.0);
    }
}
