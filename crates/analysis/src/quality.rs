//! Sequence quality checks
//!
//! Simple, deterministic measurements over a single sequence. All functions
//! accept either case and work on the uppercase form.

use std::collections::BTreeMap;

use dnasim_sim::Sequence;
use serde::Serialize;

/// Motifs searched by [`find_motifs`], as (name, pattern).
pub const MOTIFS: [(&str, &str); 4] = [
    ("TATA_box", "TATAAA"),
    ("CpG", "CG"),
    ("Kozak", "GCCACC"),
    ("PolyA", "AAAAAA"),
];

/// Default minimum length for [`find_repetitive_regions`].
pub const MIN_REPEAT_LENGTH: usize = 4;

/// A substring that occurs more than once in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatRegion {
    /// The repeated substring
    pub unit: String,
    /// Start of this occurrence (0-based)
    pub position: usize,
}

/// Quality summary of one sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceQuality {
    pub length: usize,
    /// GC content in percent
    pub gc_content: f64,
    pub valid_reading_frame: bool,
    /// Motif name -> start positions; only motifs that were found
    pub motifs: BTreeMap<String, Vec<usize>>,
    pub is_palindromic: bool,
    /// Equal to its own reverse complement, like most restriction sites
    pub is_reverse_complement_palindrome: bool,
    pub repetitive_regions: Vec<RepeatRegion>,
}

/// GC content as a percentage (0-100). Empty input yields 0.
pub fn gc_content(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .bytes()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    gc as f64 / sequence.len() as f64 * 100.0
}

/// Sliding-window GC content in percent, one value per window start.
///
/// Returns an empty vector when `window` is 0 or longer than the sequence.
pub fn gc_profile(sequence: &str, window: usize) -> Vec<f64> {
    if window == 0 || window > sequence.len() {
        return Vec::new();
    }
    sequence
        .as_bytes()
        .windows(window)
        .map(|w| {
            let gc = w
                .iter()
                .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
                .count();
            gc as f64 / window as f64 * 100.0
        })
        .collect()
}

/// True for an ORF-like sequence: starts with ATG, ends with a stop codon,
/// and its length is a multiple of 3.
pub fn has_valid_reading_frame(sequence: &str) -> bool {
    if sequence.len() < 3 {
        return false;
    }
    let upper = sequence.to_ascii_uppercase();
    let has_start = upper.starts_with("ATG");
    let has_stop = ["TAA", "TAG", "TGA"].iter().any(|c| upper.ends_with(c));
    has_start && has_stop && upper.len() % 3 == 0
}

/// Positions of every (possibly overlapping) occurrence of each known motif.
pub fn find_motifs(sequence: &str) -> BTreeMap<String, Vec<usize>> {
    let upper = sequence.to_ascii_uppercase();
    let bytes = upper.as_bytes();

    MOTIFS
        .iter()
        .filter_map(|&(name, motif)| {
            let positions: Vec<usize> = bytes
                .windows(motif.len())
                .enumerate()
                .filter(|(_, w)| *w == motif.as_bytes())
                .map(|(i, _)| i)
                .collect();
            (!positions.is_empty()).then(|| (name.to_string(), positions))
        })
        .collect()
}

/// True if the sequence reads the same backwards.
pub fn is_palindromic(sequence: &str) -> bool {
    let upper = sequence.to_ascii_uppercase();
    upper.bytes().eq(upper.bytes().rev())
}

/// True if the sequence equals its reverse complement. Sequences with
/// symbols outside the DNA alphabet never qualify.
pub fn is_reverse_complement_palindrome(sequence: &str) -> bool {
    Sequence::parse_canonical(sequence).is_ok_and(|seq| seq.reverse_complement() == seq)
}

/// Every substring of length >= `min_length` that occurs more than once
/// (non-overlapping count), reported at each start position it is found from.
///
/// If a substring does not repeat, no extension of it can, so the scan for a
/// start position stops at the first non-repeating length.
pub fn find_repetitive_regions(sequence: &str, min_length: usize) -> Vec<RepeatRegion> {
    let upper = sequence.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let n = bytes.len();
    let min_length = min_length.max(1);
    let mut repeats = Vec::new();

    if n < min_length {
        return repeats;
    }

    for i in 0..=(n - min_length) {
        for j in (i + min_length)..=n {
            let unit = &bytes[i..j];
            if count_non_overlapping(bytes, unit) > 1 {
                repeats.push(RepeatRegion {
                    unit: String::from_utf8_lossy(unit).into_owned(),
                    position: i,
                });
            } else {
                break;
            }
        }
    }
    repeats
}

fn count_non_overlapping(haystack: &[u8], needle: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if &haystack[i..i + needle.len()] == needle {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Full quality summary of `sequence`.
pub fn check_sequence_quality(sequence: &str) -> SequenceQuality {
    SequenceQuality {
        length: sequence.len(),
        gc_content: gc_content(sequence),
        valid_reading_frame: has_valid_reading_frame(sequence),
        motifs: find_motifs(sequence),
        is_palindromic: is_palindromic(sequence),
        is_reverse_complement_palindrome: is_reverse_complement_palindrome(sequence),
        repetitive_regions: find_repetitive_regions(sequence, MIN_REPEAT_LENGTH),
    }
}

/// Quality summaries for a set of named sequences.
pub fn batch_quality(sequences: &BTreeMap<String, String>) -> BTreeMap<String, SequenceQuality> {
    sequences
        .iter()
        .map(|(name, seq)| (name.clone(), check_sequence_quality(seq)))
        .collect()
}
