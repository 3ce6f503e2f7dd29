//! Error types for the bridge layer.
//!
//! These never cross the interception boundary: `AssetLoader::intercept`
//! answers every request with content or pass-through. Errors exist so
//! path handlers and builders can propagate construction and I/O
//! failures internally.

use crate::path::AssetPathError;
use webkiosk_bundle::BundleError;

/// Errors at the bridge layer.
#[derive(Debug)]
pub enum BridgeError {
    /// Request path validation error.
    Path(AssetPathError),

    /// Error from the bundle layer.
    Bundle(BundleError),

    /// Generic error with message.
    Other { message: String },
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::Path(e) => write!(f, "path error: {}", e),
            BridgeError::Bundle(e) => write!(f, "bundle error: {}", e),
            BridgeError::Other { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BridgeError::Path(e) => Some(e),
            BridgeError::Bundle(e) => Some(e),
            BridgeError::Other { .. } => None,
        }
    }
}

impl From<AssetPathError> for BridgeError {
    fn from(e: AssetPathError) -> Self {
        BridgeError::Path(e)
    }
}

impl From<BundleError> for BridgeError {
    fn from(e: BundleError) -> Self {
        BridgeError::Bundle(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn path_error_display_and_source() {
        let e = BridgeError::from(crate::AssetPath::parse("a/..").unwrap_err());
        assert!(format!("{}", e).contains("path error"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn bundle_error_display_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = BridgeError::from(BundleError::Io(io));
        assert!(format!("{}", e).contains("bundle error"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn other_error_display() {
        let e = BridgeError::Other {
            message: "something went wrong".to_string(),
        };
        assert_eq!(format!("{}", e), "something went wrong");
        assert!(StdError::source(&e).is_none());
    }
}
