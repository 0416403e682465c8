// Error taxonomy for the merge pipeline

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures surfaced by aggregation and writing.
///
/// Nothing is recovered locally: any variant aborts the run.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Root directory is missing or is not a directory.
    #[error("Source directory not found: {}", path.display())]
    NotFound {
        /// The root that was requested.
        path: PathBuf,
    },

    /// A matched file could not be read, or the destination could not be written.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path where the error occurred.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}

impl MergeError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
        }
    }
}
