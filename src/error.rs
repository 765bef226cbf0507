use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the snapshot store and the FPL client. Malformed
/// individual records are never errors; they are skipped during indexing
/// and reported through `compare::Diagnostics` instead. Only structural
/// problems (bad JSON shape, missing files, failed requests) land here.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("no snapshot found for date {0}")]
    SnapshotNotFound(String),

    #[error("data directory {} not found", .0.display())]
    DataDirNotFound(PathBuf),
}
