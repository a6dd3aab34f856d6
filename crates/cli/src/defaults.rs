//! Default values for command-line options.

pub const MUTATION_RATE: f64 = 0.01;
pub const VARIANTS: usize = 1;

/// Window length used by `mutate --batch`.
pub const BATCH_WINDOW: usize = 100;

pub const GC_FRACTION: f64 = 0.5;

/// Shortest `random --coding` output: a start and a stop codon.
pub const MIN_CODING_LENGTH: usize = 6;
