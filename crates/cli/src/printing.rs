use dnasim_analysis::{MutationStats, SequenceQuality};
use dnasim_sim::provider::RegulatoryElement;

pub fn print_variants(original: &str, variants: &[String]) {
    println!("Original: {original}");
    for (i, variant) in variants.iter().enumerate() {
        println!("Variant {}: {variant}", i + 1);
    }
}

pub fn print_mutation_summary(stats: &MutationStats) {
    println!("\n📊 Mutation Summary");
    println!("  • Variants: {}", stats.mutation_counts.len());
    println!("  • Total substitutions: {}", stats.total_mutations());
    println!("  • Mean per variant: {:.2}", stats.mean_mutations());
    println!(
        "  • Transitions / transversions: {} / {}",
        stats.transitions(),
        stats.transversions()
    );
    match stats.ti_tv_ratio() {
        Some(ratio) => println!("  • Ti/Tv ratio: {ratio:.2}"),
        None => println!("  • Ti/Tv ratio: n/a"),
    }
}

pub fn print_quality(quality: &SequenceQuality) {
    println!("🔬 Sequence Quality");
    println!("  • Length: {} bp", quality.length);
    println!("  • GC content: {:.1}%", quality.gc_content);
    println!("  • Valid reading frame: {}", yes_no(quality.valid_reading_frame));
    println!("  • Palindromic: {}", yes_no(quality.is_palindromic));
    println!(
        "  • Reverse-complement palindrome: {}",
        yes_no(quality.is_reverse_complement_palindrome)
    );

    println!("\n🧩 Motifs");
    if quality.motifs.is_empty() {
        println!("  (none)");
    }
    for (motif, positions) in &quality.motifs {
        println!("  • {motif}: {} at {positions:?}", positions.len());
    }

    println!("\n🔁 Repetitive Regions: {}", quality.repetitive_regions.len());
    for region in &quality.repetitive_regions {
        println!("  • {} at {}", region.unit, region.position);
    }
}

pub fn print_elements() {
    println!("📚 Regulatory Elements");
    for element in RegulatoryElement::ALL {
        println!("  • {:<16} {}", element.name(), element.sequence());
    }
    println!("\nUse `dnasim reference cassette` for the composite cassette.");
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
