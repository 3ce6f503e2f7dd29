//! Path handlers: the content resolver capability.

use std::sync::Arc;

use webkiosk_bundle::AssetBundle;

use crate::{AssetPath, AssetResponse, BridgeError, MediaType};

/// Resolve a path suffix to content.
///
/// One handler is registered per virtual path prefix; the loader strips
/// the prefix and passes the remaining suffix here. Handlers are
/// consulted from the host's worker threads, so implementations must be
/// callable concurrently through `&self`.
///
/// # Returns
///
/// * `Ok(None)` - Nothing at this path; the request passes through.
/// * `Ok(Some(response))` - The resolved content.
/// * `Err(BridgeError)` - Resolution failed; the loader logs and treats
///   this as pass-through.
pub trait PathHandler: Send + Sync {
    fn handle(&self, path: &AssetPath) -> Result<Option<AssetResponse>, BridgeError>;
}

impl<T: PathHandler + ?Sized> PathHandler for Box<T> {
    fn handle(&self, path: &AssetPath) -> Result<Option<AssetResponse>, BridgeError> {
        self.as_ref().handle(path)
    }
}

impl<T: PathHandler + ?Sized> PathHandler for Arc<T> {
    fn handle(&self, path: &AssetPath) -> Result<Option<AssetResponse>, BridgeError> {
        self.as_ref().handle(path)
    }
}

/// A handler that resolves suffixes against an asset bundle, inferring
/// the media type from the file extension.
pub struct BundleHandler<B> {
    bundle: B,
}

impl<B: AssetBundle> BundleHandler<B> {
    /// Wrap a bundle as a path handler.
    pub fn new(bundle: B) -> Self {
        Self { bundle }
    }

    /// The wrapped bundle.
    pub fn bundle(&self) -> &B {
        &self.bundle
    }
}

impl<B: AssetBundle> PathHandler for BundleHandler<B> {
    fn handle(&self, path: &AssetPath) -> Result<Option<AssetResponse>, BridgeError> {
        if path.is_empty() {
            return Ok(None);
        }

        match self.bundle.open(&path.as_components())? {
            Some(data) => Ok(Some(AssetResponse::new(data, MediaType::for_path(path)))),
            None => Ok(None),
        }
    }
}
