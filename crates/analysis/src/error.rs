use thiserror::Error;

/// Error type for analysis, report and export operations.
///
/// These stay local to the collaborators; the mutation engine never sees them.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
