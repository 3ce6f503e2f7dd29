//! The core trait of the bundle layer.

use std::sync::Arc;

use bytes::Bytes;

use crate::BundleError;

/// Read asset bytes from path components.
///
/// This is the narrow interface between the kiosk and its packaged
/// content: "given a relative path, return bytes, or not-found". Bundles
/// are read-only and immutable for the process lifetime, so `open` takes
/// `&self` and implementations must be callable concurrently from
/// multiple threads without locking.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn AssetBundle>`.
pub trait AssetBundle: Send + Sync {
    /// Read the asset at the given path components.
    ///
    /// # Arguments
    ///
    /// * `path` - Relative path components, already validated and
    ///   normalized by the caller. Components are plain strings with no
    ///   separators in them.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No asset at the path (not an error condition).
    /// * `Ok(Some(bytes))` - The asset's bytes.
    /// * `Err(BundleError)` - An I/O failure occurred.
    fn open(&self, path: &[&str]) -> Result<Option<Bytes>, BundleError>;

    /// Check whether an asset exists without necessarily reading it.
    ///
    /// The default implementation reads the asset; backends with cheaper
    /// existence checks should override it.
    fn contains(&self, path: &[&str]) -> Result<bool, BundleError> {
        Ok(self.open(path)?.is_some())
    }
}

// Blanket implementations for references and smart pointers

impl<T: AssetBundle + ?Sized> AssetBundle for &T {
    fn open(&self, path: &[&str]) -> Result<Option<Bytes>, BundleError> {
        (**self).open(path)
    }

    fn contains(&self, path: &[&str]) -> Result<bool, BundleError> {
        (**self).contains(path)
    }
}

impl<T: AssetBundle + ?Sized> AssetBundle for Box<T> {
    fn open(&self, path: &[&str]) -> Result<Option<Bytes>, BundleError> {
        self.as_ref().open(path)
    }

    fn contains(&self, path: &[&str]) -> Result<bool, BundleError> {
        self.as_ref().contains(path)
    }
}

impl<T: AssetBundle + ?Sized> AssetBundle for Arc<T> {
    fn open(&self, path: &[&str]) -> Result<Option<Bytes>, BundleError> {
        self.as_ref().open(path)
    }

    fn contains(&self, path: &[&str]) -> Result<bool, BundleError> {
        self.as_ref().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBundle;

    #[test]
    fn object_safety_works() {
        let mut bundle = MemoryBundle::new();
        bundle.insert("a/b", &b"data"[..]);

        let boxed: Box<dyn AssetBundle> = Box::new(bundle);
        assert!(boxed.open(&["a", "b"]).unwrap().is_some());
        assert!(boxed.open(&["a", "c"]).unwrap().is_none());
    }

    #[test]
    fn arc_sharing_works() {
        let mut bundle = MemoryBundle::new();
        bundle.insert("x", &b"1"[..]);

        let shared = Arc::new(bundle);
        let clone = Arc::clone(&shared);
        assert!(shared.contains(&["x"]).unwrap());
        assert!(clone.contains(&["x"]).unwrap());
    }

    #[test]
    fn default_contains_uses_open() {
        let mut bundle = MemoryBundle::new();
        bundle.insert("here", &b"yes"[..]);

        let by_ref: &dyn AssetBundle = &bundle;
        assert!(by_ref.contains(&["here"]).unwrap());
        assert!(!by_ref.contains(&["gone"]).unwrap());
    }
}
