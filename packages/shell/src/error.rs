//! Error types for the shell layer.
//!
//! Everything here happens once, at startup, before any interception -
//! a `ShellError` aborts the launch rather than affecting requests.

use std::path::PathBuf;

use webkiosk_bridge::BridgeError;
use webkiosk_bundle::BundleError;

use crate::HostError;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("could not read config file {path}: {error}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("no asset routes configured")]
    NoRoutes,

    #[error("insecure settings: {message}")]
    InsecureSettings { message: String },

    #[error("entry asset not found: {url}")]
    EntryMissing { url: String },

    #[error("bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("bundle error: {0}")]
    Bundle(#[from] BundleError),

    #[error("host error: {0}")]
    Host(#[from] HostError),
}
