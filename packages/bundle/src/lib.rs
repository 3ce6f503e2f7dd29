//! Asset bundles: the read-only byte store packaged with a kiosk application.
//!
//! Everything at this level is pure bytes addressed by path components - no
//! URL parsing, no media types, no origin checks. Those belong to the bridge
//! layer (`webkiosk-bridge`), which sits on top of this one.
//!
//! Use this layer for:
//! - Serving a directory of built web assets (`DirBundle`)
//! - Embedding assets in memory for tests or single-binary builds
//!   (`MemoryBundle`)
//! - Implementing custom asset sources behind the `AssetBundle` trait
//!
//! # Example
//!
//! ```rust
//! use webkiosk_bundle::{AssetBundle, MemoryBundle};
//!
//! let mut bundle = MemoryBundle::new();
//! bundle.insert("index.html", &b"<!doctype html>"[..]);
//!
//! let data = bundle.open(&["index.html"]).unwrap();
//! assert!(data.is_some());
//!
//! // A missing asset is a normal outcome, not an error.
//! assert!(bundle.open(&["missing.js"]).unwrap().is_none());
//! ```

pub use bytes::Bytes;

mod dir;
mod error;
mod memory;
mod traits;

pub use dir::DirBundle;
pub use error::BundleError;
pub use memory::MemoryBundle;
pub use traits::AssetBundle;
