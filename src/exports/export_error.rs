use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("Failed to write row for '{unit}': {source}")]
    Row { unit: String, source: io::Error },

    #[error("Write failed: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize failure report: {0}")]
    Report(#[from] serde_json::Error),
}
