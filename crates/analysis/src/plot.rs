//! Text visualization of mutation patterns.
//!
//! Renders the same three panels as a plotting front end would (mutation
//! count distribution, per-position frequency, substitution types) as
//! horizontal bar charts that fit in a terminal.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::AnalysisError;
use crate::quality::gc_profile;
use crate::stats::analyze_mutations;

/// Width in characters of the longest bar.
pub const BAR_WIDTH: usize = 40;

fn bar(value: usize, max: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * BAR_WIDTH as f64).round().max(1.0) as usize;
    "#".repeat(len)
}

fn push_panel<K: std::fmt::Display>(out: &mut String, title: &str, rows: &BTreeMap<K, usize>) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
    if rows.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }

    let labels: Vec<String> = rows.keys().map(ToString::to_string).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);
    let max = rows.values().copied().max().unwrap_or(0);

    for (label, &value) in labels.iter().zip(rows.values()) {
        let _ = writeln!(out, "  {label:>width$} | {} {value}", bar(value, max));
    }
}

/// Render the three mutation-pattern panels for `variants` against `original`.
pub fn render_mutation_patterns<S: AsRef<str>>(original: &str, variants: &[S]) -> String {
    let stats = analyze_mutations(original, variants);
    let mut out = String::new();

    push_panel(
        &mut out,
        "Distribution of Mutations (mutations per variant -> variants)",
        &stats.count_histogram(),
    );
    out.push('\n');
    push_panel(
        &mut out,
        "Mutation Positions (position -> variants mutated)",
        &stats.position_frequency,
    );
    out.push('\n');
    push_panel(&mut out, "Substitution Types", &stats.substitutions);

    out
}

/// Write the mutation-pattern panels to `path`.
pub fn write_mutation_patterns<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    original: &str,
    variants: &[S],
) -> Result<(), AnalysisError> {
    fs::write(path, render_mutation_patterns(original, variants))?;
    Ok(())
}

/// Render the sliding-window GC profile, one row per window start.
pub fn render_gc_profile(sequence: &str, window: usize) -> String {
    let profile = gc_profile(sequence, window);
    let mut out = String::new();
    let _ = writeln!(out, "GC Content Distribution (window size: {window})");

    if profile.is_empty() {
        let _ = writeln!(out, "  (sequence shorter than window)");
        return out;
    }

    let width = (profile.len() - 1).to_string().len();
    let bar_width = BAR_WIDTH;
    for (pos, gc) in profile.iter().enumerate() {
        let len = ((gc / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bars = "#".repeat(len);
        let _ = writeln!(out, "  {pos:>width$} | {bars:<bar_width$} {gc:5.1}%");
    }
    out
}
