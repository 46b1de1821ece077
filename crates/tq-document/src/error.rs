//! Error types for document loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a document from storage.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
