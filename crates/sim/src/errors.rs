use std::collections::BTreeSet;
use std::error;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl error::Error for InvalidNucleotide {}

/// Error type for failures when parsing a `Sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSequence {
    /// The first character that was not recognized as a nucleotide.
    InvalidChar(char),

    /// Every distinct character outside the A/C/G/T alphabet.
    InvalidSymbols(BTreeSet<char>),
}

impl fmt::Display for InvalidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar(c) => write!(f, "Invalid character in sequence: '{c}'"),
            Self::InvalidSymbols(symbols) => {
                write!(f, "Invalid nucleotides found: {}", format_symbols(symbols))
            }
        }
    }
}

impl error::Error for InvalidSequence {}

/// Errors raised at the mutation engine's call boundary.
///
/// Every variant is produced before any sampling happens, except
/// `UniquenessExhausted`, which reports that the bounded attempt budget ran
/// out. No partial result accompanies any of them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    /// The sequence contains symbols outside {A, C, G, T}.
    #[error("Sequence must only contain A, T, G, C nucleotides (found {})", format_symbols(.0))]
    InvalidAlphabet(BTreeSet<char>),

    /// The base mutation rate is outside [0, 1] or not a number.
    #[error("Invalid mutation rate: {0} (must be between 0.0 and 1.0)")]
    InvalidRate(f64),

    /// Fewer than one variant was requested.
    #[error("Invalid variant count: {0} (must be at least 1)")]
    InvalidVariantCount(usize),

    /// The attempt budget was spent before enough distinct variants appeared.
    #[error(
        "Could not generate {requested} unique variants ({generated} found in {attempts} attempts). Try increasing mutation rate."
    )]
    UniquenessExhausted {
        requested: usize,
        generated: usize,
        attempts: usize,
    },

    /// A substitution or context model was built from unusable parameters.
    #[error("Invalid mutation model: {0}")]
    InvalidModel(String),
}

impl From<InvalidSequence> for MutationError {
    fn from(e: InvalidSequence) -> Self {
        match e {
            InvalidSequence::InvalidChar(c) => Self::InvalidAlphabet(BTreeSet::from([c])),
            InvalidSequence::InvalidSymbols(symbols) => Self::InvalidAlphabet(symbols),
        }
    }
}

/// Errors raised while loading an engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] MutationError),
}

/// Errors raised by the sequence providers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("Invalid GC fraction: {0} (must be between 0.0 and 1.0)")]
    InvalidGcFraction(f64),

    #[error("Unknown reference element '{0}'")]
    UnknownElement(String),
}

fn format_symbols(symbols: &BTreeSet<char>) -> String {
    let quoted: Vec<String> = symbols.iter().map(|c| format!("'{c}'")).collect();
    format!("{{{}}}", quoted.join(", "))
}
