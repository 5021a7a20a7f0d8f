//! Error types for a save attempt.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A save attempt was started before its inputs were ready.
///
/// The `Display` text is shown verbatim in the error dialog.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("Please select a file first.")]
    NoSource,

    #[error("Please choose a new extension from the list.")]
    NoTarget,
}

/// The copy to the destination failed.
#[derive(Error, Debug)]
pub enum CopyError {
    /// Source and destination resolve to the same file.
    #[error("'{}' and the destination are the same file", path.display())]
    SameFile { path: PathBuf },

    /// An I/O operation failed.
    #[error("Failed to {operation} '{}': {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CopyError {
    /// Create an I/O error with the failing operation and path.
    pub fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}
