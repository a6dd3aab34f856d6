use anyhow::{Context, Result};
use dnasim_analysis::{
    analyze_mutations, render_mutation_patterns, write_fasta, write_mutation_patterns,
    write_mutations,
};
use dnasim_sim::config::EngineConfig;
use dnasim_sim::{MutationEngine, MutationError, Sequence};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use std::path::Path;

use super::resolve_seed;
use crate::args::MutateArgs;
use crate::defaults::BATCH_WINDOW;
use crate::printing::{print_mutation_summary, print_variants};

pub fn run_mutate(args: &MutateArgs) -> Result<()> {
    // Reject bad symbols before any engine work
    let original = Sequence::parse_canonical(&args.sequence).map_err(MutationError::from)?;

    let engine = load_engine(args.config.as_deref())?;
    let seed = resolve_seed(args.seed);
    info!("Using seed {seed}");

    let variants = if args.batch && original.len() > BATCH_WINDOW {
        mutate_windows(
            &engine,
            &original,
            args.rate,
            args.variants,
            BATCH_WINDOW,
            seed,
        )?
    } else {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        engine.mutate_sequence(&original, args.rate, args.variants, &mut rng)?
    };

    let original = original.to_string();
    let variants: Vec<String> = variants.iter().map(Sequence::to_string).collect();
    print_variants(&original, &variants);

    if let Some(path) = &args.fasta {
        write_fasta(path, &variants)
            .with_context(|| format!("Failed to write FASTA to {}", path.display()))?;
        println!("✓ Variants written to {}", path.display());
    }

    if let Some(path) = &args.mutations {
        write_mutations(path, &original, &variants)
            .with_context(|| format!("Failed to write mutation table to {}", path.display()))?;
        println!("✓ Mutation table written to {}", path.display());
    }

    if args.visualize {
        print_mutation_summary(&analyze_mutations(&original, &variants));
        match &args.output {
            Some(path) => {
                write_mutation_patterns(path, &original, &variants)
                    .with_context(|| format!("Failed to write plot to {}", path.display()))?;
                println!("✓ Plot written to {}", path.display());
            }
            None => {
                println!();
                print!("{}", render_mutation_patterns(&original, &variants));
            }
        }
    }

    Ok(())
}

fn load_engine(config: Option<&Path>) -> Result<MutationEngine> {
    match config {
        Some(path) => {
            let engine = EngineConfig::from_json_file(path)
                .and_then(|config| config.build())
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            Ok(engine)
        }
        None => Ok(MutationEngine::default()),
    }
}

/// Mutate `original` in windows of `window` bases and stitch the results.
///
/// Every window gets its own generator seeded from a master generator, so the
/// output depends only on `seed`, not on thread scheduling. Variant `i` is the
/// concatenation of window-variant `i` of every window; since the first
/// window's variants are distinct, so are the stitched ones.
pub(crate) fn mutate_windows(
    engine: &MutationEngine,
    original: &Sequence,
    rate: f64,
    n_variants: usize,
    window: usize,
    seed: u64,
) -> Result<Vec<Sequence>, MutationError> {
    let windows: Vec<Sequence> = original
        .as_slice()
        .chunks(window.max(1))
        .map(|chunk| Sequence::from_nucleotides(chunk.to_vec()))
        .collect();

    let mut master = Xoshiro256PlusPlus::seed_from_u64(seed);
    let seeds: Vec<u64> = (0..windows.len()).map(|_| master.random()).collect();

    debug!(
        "Batch mode: {} windows of up to {window} bases",
        windows.len()
    );

    let per_window: Vec<Vec<Sequence>> = windows
        .par_iter()
        .zip(seeds.par_iter())
        .map(|(chunk, &window_seed)| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(window_seed);
            engine.mutate_sequence(chunk, rate, n_variants, &mut rng)
        })
        .collect::<Result<_, _>>()?;

    let variants = (0..n_variants)
        .map(|i| {
            let mut stitched = Sequence::with_capacity(original.len());
            for window_variants in &per_window {
                stitched.extend_from(&window_variants[i]);
            }
            stitched
        })
        .collect();

    Ok(variants)
}
