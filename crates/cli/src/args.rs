use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct MutateArgs {
    /// DNA sequence to mutate (A, T, G, C; either case)
    pub sequence: String,

    /// Per-base mutation rate, between 0 and 1
    #[arg(short = 'r', long, default_value_t = defaults::MUTATION_RATE)]
    pub rate: f64,

    /// Number of distinct variants to generate
    #[arg(short = 'n', long, default_value_t = defaults::VARIANTS)]
    pub variants: usize,

    /// Render mutation patterns as a text plot
    #[arg(short = 'v', long)]
    pub visualize: bool,

    /// Write the plot here instead of stdout (only with --visualize)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Mutate long sequences window by window
    ///
    /// Sequences longer than the window size are split, each window is
    /// mutated independently and the variants are stitched back together.
    #[arg(short = 'b', long)]
    pub batch: bool,

    /// Random seed (default: drawn from the system)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Engine configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the variants to a FASTA file
    #[arg(long)]
    pub fasta: Option<PathBuf>,

    /// Write the mutation table to a file (.json for JSON, CSV otherwise)
    #[arg(long)]
    pub mutations: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct QualityArgs {
    /// DNA sequence to inspect
    pub sequence: String,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the plain-text report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Show a sliding-window GC profile with this window size
    #[arg(long)]
    pub window: Option<usize>,
}

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Sequence length in bases
    ///
    /// With --coding the length is rounded down to whole codons and must be
    /// at least 6.
    #[arg(short = 'l', long)]
    pub length: usize,

    /// Expected GC fraction, between 0 and 1
    #[arg(long, default_value_t = defaults::GC_FRACTION)]
    pub gc: f64,

    /// Random seed (default: drawn from the system)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generate an open reading frame of about `length` bases instead
    #[arg(long)]
    pub coding: bool,
}
