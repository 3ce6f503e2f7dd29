//! The local asset bridge: request interception over a synthetic HTTPS origin.
//!
//! This layer adds meaning to the raw bytes of `webkiosk-bundle`:
//! - `AssetPath`: validated, percent-decoded request path
//! - `MediaType`: MIME type inferred from file extensions
//! - `AssetResponse`: resolved content - bytes plus media type
//! - `PathHandler`: the content resolver capability, one method
//! - `AssetLoader`: routes intercepted request URLs to path handlers
//!
//! The bridge gives bundled local assets a well-formed web origin
//! (`https://appassets.localhost/...` by default) so an embedded web
//! content host can load them without any filesystem URLs being enabled.
//! Every request the host issues is answered with either resolved content
//! or a pass-through signal; a missing asset and an unregistered prefix
//! are deliberately the same outcome.
//!
//! # Example
//!
//! ```rust
//! use webkiosk_bridge::{AssetLoader, BundleHandler};
//! use webkiosk_bundle::MemoryBundle;
//!
//! let mut bundle = MemoryBundle::new();
//! bundle.insert("index.html", &b"<!doctype html>"[..]);
//!
//! let loader = AssetLoader::builder()
//!     .add_handler("/assets/", BundleHandler::new(bundle))
//!     .build()
//!     .unwrap();
//!
//! let response = loader
//!     .intercept("https://appassets.localhost/assets/index.html")
//!     .unwrap();
//! assert_eq!(response.media_type().as_str(), "text/html");
//!
//! // Anything else passes through to the host's own handling.
//! assert!(loader.intercept("https://example.com/index.html").is_none());
//! ```

pub use bytes::Bytes;

mod error;
mod handler;
mod loader;
mod media_type;
mod path;
mod response;

pub use error::BridgeError;
pub use handler::{BundleHandler, PathHandler};
pub use loader::{AssetLoader, AssetLoaderBuilder, DEFAULT_DOMAIN};
pub use media_type::MediaType;
pub use path::{AssetPath, AssetPathError};
pub use response::AssetResponse;

// Re-export bundle types for convenience
pub use webkiosk_bundle::{AssetBundle, BundleError, DirBundle, MemoryBundle};
