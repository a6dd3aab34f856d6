use super::Nucleotide;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use crate::errors::InvalidSequence;

/// Mutable DNA sequence backed by a vector of Nucleotides.
///
/// A `Sequence` is always canonical: every element is one of A/C/G/T and it
/// renders in uppercase regardless of the case it was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    ///
    /// ```rust
    /// # use dnasim_sim::base::Sequence;
    /// let seq = Sequence::new();
    /// assert_eq!(seq.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a `Sequence` with reserved capacity for `capacity` bases.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Create a `Sequence` from a vector of `Nucleotide`s.
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Parse `s` into a canonical sequence, checking every character.
    ///
    /// Unlike `FromStr`, which stops at the first bad character, this
    /// collects the full set of offending symbols so callers can report them
    /// all at once.
    ///
    /// ```rust
    /// # use dnasim_sim::base::Sequence;
    /// let seq = Sequence::parse_canonical("acgt").unwrap();
    /// assert_eq!(seq.to_string(), "ACGT");
    /// assert!(Sequence::parse_canonical("ANXT").is_err());
    /// ```
    pub fn parse_canonical(s: &str) -> Result<Self, InvalidSequence> {
        let mut bases = Vec::with_capacity(s.len());
        let mut invalid = BTreeSet::new();

        for c in s.chars() {
            match Nucleotide::from_char(c) {
                Some(base) => bases.push(base),
                None => {
                    invalid.insert(c.to_ascii_uppercase());
                }
            }
        }

        if invalid.is_empty() {
            Ok(Self(bases))
        } else {
            Err(InvalidSequence::InvalidSymbols(invalid))
        }
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Borrow the mutable underlying `Nucleotide` slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Nucleotide] {
        &mut self.0
    }

    /// Append `base` to the end of the sequence.
    #[inline]
    pub fn push(&mut self, base: Nucleotide) {
        self.0.push(base);
    }

    /// Append all bases of `other`.
    pub fn extend_from(&mut self, other: &Sequence) {
        self.0.extend_from_slice(&other.0);
    }

    /// True if position `index` is the C of a CpG dinucleotide.
    ///
    /// The last position can never qualify since it has no following base.
    #[inline]
    pub fn is_cpg_site(&self, index: usize) -> bool {
        matches!(
            (self.get(index), self.get(index + 1)),
            (Some(Nucleotide::C), Some(Nucleotide::G))
        )
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// Only the overlapping prefix is compared.
    pub fn mismatches(&self, other: &Sequence) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// The opposite strand read 5' to 3'.
    pub fn reverse_complement(&self) -> Sequence {
        self.0.iter().rev().map(|n| n.complement()).collect()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGT") into a `Sequence`.
    ///
    /// Case-insensitive; fails on the first character outside the alphabet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data: Result<Vec<Nucleotide>, _> = s
            .chars()
            .map(|c| Nucleotide::from_char(c).ok_or(InvalidSequence::InvalidChar(c)))
            .collect();

        Ok(Self(data?))
    }
}

impl From<Vec<Nucleotide>> for Sequence {
    fn from(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }
}

impl FromIterator<Nucleotide> for Sequence {
    fn from_iter<I: IntoIterator<Item = Nucleotide>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement() {
        let seq = Sequence::from_str("AACG").unwrap();
        assert_eq!(seq.reverse_complement().to_string(), "CGTT");
        // EcoRI site reads the same on both strands
        let ecori = Sequence::from_str("GAATTC").unwrap();
        assert_eq!(ecori.reverse_complement(), ecori);
        assert!(Sequence::new().reverse_complement().is_empty());
    }

    #[test]
    fn test_from_str_uppercases() {
        let seq = Sequence::from_str("acGt").unwrap();
        assert_eq!(seq.to_string(), "ACGT");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_from_str_reports_first_bad_char() {
        let err = Sequence::from_str("ACXN").unwrap_err();
        assert_eq!(err, InvalidSequence::InvalidChar('X'));
    }

    #[test]
    fn test_parse_canonical_collects_all_symbols() {
        let err = Sequence::parse_canonical("AxCNnG").unwrap_err();
        assert_eq!(
            err,
            InvalidSequence::InvalidSymbols(BTreeSet::from(['N', 'X']))
        );
    }

    #[test]
    fn test_parse_canonical_empty() {
        let seq = Sequence::parse_canonical("").unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_cpg_sites() {
        let seq = Sequence::from_str("ACGTCG").unwrap();
        assert!(!seq.is_cpg_site(0));
        assert!(seq.is_cpg_site(1));
        assert!(!seq.is_cpg_site(2));
        assert!(seq.is_cpg_site(4));
        assert!(!seq.is_cpg_site(5));
        assert!(!seq.is_cpg_site(99));
    }

    #[test]
    fn test_single_base_is_never_cpg() {
        let seq = Sequence::from_str("C").unwrap();
        assert!(!seq.is_cpg_site(0));
    }

    #[test]
    fn test_mismatches() {
        let a = Sequence::from_str("ACGT").unwrap();
        let b = Sequence::from_str("AGGA").unwrap();
        assert_eq!(a.mismatches(&b), 2);
        assert_eq!(a.mismatches(&a), 0);
    }

    #[test]
    fn test_extend_from() {
        let mut a = Sequence::from_str("AC").unwrap();
        a.extend_from(&Sequence::from_str("GT").unwrap());
        assert_eq!(a.to_string(), "ACGT");
    }
}
