use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that abort a bundle run. Every variant names the path or
/// pattern it came from.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to list directory {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: TransformError,
    },
    #[error("invalid glob pattern {pattern}: {reason}")]
    Pattern { pattern: String, reason: String },
}

/// Content that the modifier-stripping transform cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("no declaration found after skipping package, import, comment and blank lines")]
    NoDeclaration,
    #[error("declaration has no space separating a leading token")]
    NoSpace,
}
