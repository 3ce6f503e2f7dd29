//! In-memory bundle for embedded assets and tests.

use std::collections::HashMap;

use bytes::Bytes;

use crate::{AssetBundle, BundleError};

/// A bundle backed by an in-memory map.
///
/// Entries are keyed by slash-joined relative paths. Useful for embedding
/// a small asset set directly in the binary, and as a test double for
/// directory-backed bundles.
#[derive(Debug, Default, Clone)]
pub struct MemoryBundle {
    entries: HashMap<String, Bytes>,
}

impl MemoryBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset at a slash-separated relative path.
    ///
    /// Leading, trailing and doubled slashes are normalized away, so
    /// `"a//b/"` and `"a/b"` name the same entry.
    pub fn insert(&mut self, path: &str, data: impl Into<Bytes>) {
        self.entries.insert(Self::key_for(path), data.into());
    }

    /// Number of assets in the bundle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the bundle holds no assets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (path, bytes) entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bytes)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn key_for(path: &str) -> String {
        path.split('/')
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl AssetBundle for MemoryBundle {
    fn open(&self, path: &[&str]) -> Result<Option<Bytes>, BundleError> {
        Ok(self.entries.get(&path.join("/")).cloned())
    }

    fn contains(&self, path: &[&str]) -> Result<bool, BundleError> {
        Ok(self.entries.contains_key(&path.join("/")))
    }
}
