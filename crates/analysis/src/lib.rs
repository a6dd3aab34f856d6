//! Analysis tools for dnasim variants
//!
//! This crate consumes the engine's output (the original sequence plus its
//! variants) and never feeds anything back into it:
//! - Sequence quality checks (GC content, motifs, reading frame, repeats)
//! - Mutation statistics (per-variant counts, positions, substitution types)
//! - Export to FASTA, CSV and JSON
//! - Text plots and quality reports

pub mod error;
pub mod export;
pub mod plot;
pub mod quality;
pub mod report;
pub mod stats;

pub use error::AnalysisError;
pub use export::{to_fasta, write_fasta, write_mutations};
pub use plot::{render_gc_profile, render_mutation_patterns, write_mutation_patterns};
pub use quality::{check_sequence_quality, gc_content, SequenceQuality};
pub use report::{quality_report, write_quality_report};
pub use stats::{analyze_mutations, mutation_records, MutationRecord, MutationStats};
