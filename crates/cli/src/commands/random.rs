use anyhow::{bail, Result};
use dnasim_sim::provider::{random_coding_sequence, random_sequence};
use log::info;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::resolve_seed;
use crate::args::RandomArgs;
use crate::defaults::MIN_CODING_LENGTH;

pub fn run_random(args: &RandomArgs) -> Result<()> {
    let seed = resolve_seed(args.seed);
    info!("Using seed {seed}");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    let sequence = if args.coding {
        if args.length < MIN_CODING_LENGTH {
            bail!(
                "A coding sequence needs at least {MIN_CODING_LENGTH} bases (start and stop codon), got {}",
                args.length
            );
        }
        // start and stop codons take two of the codons
        let n_codons = (args.length / 3).saturating_sub(2);
        random_coding_sequence(n_codons, &mut rng)
    } else {
        random_sequence(args.length, args.gc, &mut rng)?
    };

    println!("{sequence}");
    Ok(())
}
