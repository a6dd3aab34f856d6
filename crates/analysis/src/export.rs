//! Export of variants and mutation tables.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::AnalysisError;
use crate::stats::mutation_records;

/// Column names of the mutation table.
pub const MUTATION_COLUMNS: [&str; 4] = ["variant", "position", "original", "mutated"];

/// Render sequences as FASTA records named `sequence_1`, `sequence_2`, ...
pub fn to_fasta<S: AsRef<str>>(sequences: &[S]) -> String {
    let mut content = String::new();
    for (i, seq) in sequences.iter().enumerate() {
        content.push_str(&format!(">sequence_{}\n{}\n", i + 1, seq.as_ref()));
    }
    content
}

/// Write sequences to `path` in FASTA format.
pub fn write_fasta<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    sequences: &[S],
) -> Result<(), AnalysisError> {
    fs::write(path.as_ref(), to_fasta(sequences))?;
    info!(
        "Wrote {} FASTA records to {}",
        sequences.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write the per-position mutation table of `variants` against `original`.
///
/// The format follows the file extension: `.json` produces a pretty-printed
/// JSON array of records, anything else a CSV file with a header row.
pub fn write_mutations<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    original: &str,
    variants: &[S],
) -> Result<(), AnalysisError> {
    let path = path.as_ref();
    let records = mutation_records(original, variants);

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        fs::write(path, serde_json::to_string_pretty(&records)?)?;
    } else {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(MUTATION_COLUMNS)?;
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }

    info!(
        "Wrote {} mutation records to {}",
        records.len(),
        path.display()
    );
    Ok(())
}
