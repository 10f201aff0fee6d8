//! Errors at the two I/O boundaries of report generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Error reading JSON: {}: {}", path.display(), source)]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading JSON: {}: {}", path.display(), source)]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error writing HTML: {}: {}", path.display(), source)]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    /// True for failures on the input side (nothing was written)
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ReportError::WriteOutput { .. })
    }
}
