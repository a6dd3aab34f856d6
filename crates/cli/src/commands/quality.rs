use anyhow::{Context, Result};
use dnasim_analysis::{check_sequence_quality, render_gc_profile, write_quality_report};

use crate::args::QualityArgs;
use crate::printing::print_quality;

pub fn run_quality(args: &QualityArgs) -> Result<()> {
    let quality = check_sequence_quality(&args.sequence);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quality)?);
    } else {
        print_quality(&quality);
    }

    if let Some(window) = args.window {
        println!();
        print!("{}", render_gc_profile(&args.sequence, window));
    }

    if let Some(path) = &args.report {
        write_quality_report(&args.sequence, path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        if !args.json {
            println!("\n✓ Report written to {}", path.display());
        }
    }

    Ok(())
}
