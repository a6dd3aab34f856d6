//! Plain-text sequence quality reports.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;

use crate::error::AnalysisError;
use crate::quality::check_sequence_quality;

/// Build the quality report for `sequence`.
pub fn quality_report(sequence: &str) -> String {
    let quality = check_sequence_quality(sequence);
    let mut out = String::new();

    let _ = writeln!(out, "DNA Sequence Quality Report");
    let _ = writeln!(out, "{}", "=".repeat(30));
    let _ = writeln!(out, "Sequence Length: {} bp", quality.length);
    let _ = writeln!(out, "GC Content: {:.1}%", quality.gc_content);
    let _ = writeln!(out, "Valid Reading Frame: {}", quality.valid_reading_frame);
    let _ = writeln!(out, "Palindromic: {}", quality.is_palindromic);
    let _ = writeln!(
        out,
        "Reverse-Complement Palindrome: {}",
        quality.is_reverse_complement_palindrome
    );

    let _ = writeln!(out, "\nDetected Motifs:");
    if quality.motifs.is_empty() {
        let _ = writeln!(out, "- none");
    }
    for (motif, positions) in &quality.motifs {
        let _ = writeln!(
            out,
            "- {motif}: {} occurrences at positions {positions:?}",
            positions.len()
        );
    }

    let _ = writeln!(out, "\nRepetitive Regions:");
    if quality.repetitive_regions.is_empty() {
        let _ = writeln!(out, "- none");
    }
    for region in &quality.repetitive_regions {
        let _ = writeln!(out, "- '{}' at position {}", region.unit, region.position);
    }

    out
}

/// Write the quality report for `sequence` to `path`.
pub fn write_quality_report<P: AsRef<Path>>(sequence: &str, path: P) -> Result<(), AnalysisError> {
    fs::write(path.as_ref(), quality_report(sequence))?;
    info!("Wrote quality report to {}", path.as_ref().display());
    Ok(())
}
