//! Directory-backed bundle.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::{fs, io};

use bytes::Bytes;

use crate::{AssetBundle, BundleError};

/// A bundle serving the files under a directory root.
///
/// The root is validated and canonicalized at construction; reads map
/// path components onto it using only normal components, so a component
/// like `..` can never be smuggled into the file path. Symlinked entries
/// that resolve outside the canonical root are treated as not-found.
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    /// Create a bundle over a directory root.
    ///
    /// Fails if the root does not exist, is not a directory, or cannot
    /// be canonicalized.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, BundleError> {
        let root = root.into();

        let attr = fs::metadata(&root).map_err(|error| BundleError::RootInvalid {
            path: root.clone(),
            error,
        })?;

        if !attr.is_dir() {
            return Err(BundleError::RootInvalid {
                path: root,
                error: io::Error::other("bundle root must be a directory"),
            });
        }

        match root.canonicalize() {
            Ok(root) => Ok(DirBundle { root }),
            Err(error) => Err(BundleError::RootInvalid { path: root, error }),
        }
    }

    /// The canonical bundle root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map path components onto the root as normal components only.
    fn file_path(&self, path: &[&str]) -> PathBuf {
        self.root
            .components()
            .chain(path.iter().map(|s| Component::Normal(OsStr::new(s))))
            .collect()
    }
}

impl AssetBundle for DirBundle {
    fn open(&self, path: &[&str]) -> Result<Option<Bytes>, BundleError> {
        let file_path = self.file_path(path);

        // Canonicalize so symlinks can't serve content from outside the root.
        // A path that descends through a regular file is as not-found as a
        // missing one.
        let canonical = match file_path.canonicalize() {
            Ok(p) => p,
            Err(e)
                if e.kind() == io::ErrorKind::NotFound
                    || e.kind() == io::ErrorKind::NotADirectory =>
            {
                return Ok(None)
            }
            Err(e) => return Err(BundleError::Io(e)),
        };

        if !canonical.starts_with(&self.root) {
            log::warn!(
                "asset {} resolves outside bundle root {}",
                file_path.display(),
                self.root.display()
            );
            return Ok(None);
        }

        if canonical.is_dir() {
            return Ok(None);
        }

        match fs::read(&canonical) {
            Ok(data) => {
                log::debug!("read {} ({} bytes)", canonical.display(), data.len());
                Ok(Some(Bytes::from(data)))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BundleError::Io(e)),
        }
    }

    fn contains(&self, path: &[&str]) -> Result<bool, BundleError> {
        let file_path = self.file_path(path);
        match file_path.canonicalize() {
            Ok(p) => Ok(p.starts_with(&self.root) && p.is_file()),
            Err(e)
                if e.kind() == io::ErrorKind::NotFound
                    || e.kind() == io::ErrorKind::NotADirectory =>
            {
                Ok(false)
            }
            Err(e) => Err(BundleError::Io(e)),
        }
    }
}
