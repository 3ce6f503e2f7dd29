//! Error types for the bundle layer.
//!
//! Errors at this level are I/O-focused. "Asset does not exist" is not an
//! error - bundle reads return `Ok(None)` for that. Semantic failures
//! (bad URLs, traversal attempts) belong to the bridge layer.

use std::io;
use std::path::PathBuf;

/// Errors at the bundle (byte store) layer.
#[derive(Debug)]
pub enum BundleError {
    /// The bundle root could not be used at construction time.
    ///
    /// Missing directory, not a directory, or not canonicalizable.
    RootInvalid {
        /// The root path that was rejected.
        path: PathBuf,
        /// The underlying I/O error.
        error: io::Error,
    },

    /// An I/O failure while reading an asset that does exist.
    ///
    /// Not-found conditions never take this form; they are `Ok(None)`
    /// from `AssetBundle::open`.
    Io(io::Error),
}

impl std::fmt::Display for BundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleError::RootInvalid { path, error } => {
                write!(f, "invalid bundle root {}: {}", path.display(), error)
            }
            BundleError::Io(e) => write!(f, "bundle I/O error: {}", e),
        }
    }
}

impl std::error::Error for BundleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BundleError::RootInvalid { error, .. } => Some(error),
            BundleError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for BundleError {
    fn from(e: io::Error) -> Self {
        BundleError::Io(e)
    }
}
