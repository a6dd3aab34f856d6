mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{MutateArgs, QualityArgs, RandomArgs};
use commands::{mutate, quality, random, reference};

/// dnasim: DNA point-mutation variant generator
///
/// Generates distinct variants of a DNA sequence under a transition-biased
/// substitution model with elevated mutability at CpG sites.
#[derive(Parser, Debug)]
#[command(name = "dnasim")]
#[command(author, version, about = "Generates point-mutation variants of DNA sequences", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate distinct mutated variants of a sequence.
    Mutate(Box<MutateArgs>),

    /// Report GC content, motifs, reading frame and repeats of a sequence.
    Quality(QualityArgs),

    /// List the built-in regulatory elements, or print one of them.
    ///
    /// Use `cassette` to print the composite regulatory cassette.
    Reference {
        /// Element name (case-insensitive)
        name: Option<String>,
    },

    /// Generate a synthetic sequence.
    Random(RandomArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Mutate(args) => {
            mutate::run_mutate(&args)?;
        }
        Commands::Quality(args) => {
            quality::run_quality(&args)?;
        }
        Commands::Reference { name } => {
            reference::show_reference(name.as_deref())?;
        }
        Commands::Random(args) => {
            random::run_random(&args)?;
        }
    }

    Ok(())
}
