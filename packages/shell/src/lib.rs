//! The embedding shell: one-time host configuration and startup wiring.
//!
//! The shell owns everything that happens exactly once, before the first
//! resource request: applying [`HostSettings`] to the embedded web
//! content host, installing the asset loader as its request interceptor,
//! putting the display into kiosk mode, and issuing the initial
//! navigation to the entry document under the virtual origin.
//!
//! The web content host and the display are collaborators, reached only
//! through the capability traits in [`host`]: the shell commands them,
//! nothing flows back. [`TestHost`] and [`TestDisplay`] implement the
//! same traits over in-memory state for tests.
//!
//! # Example
//!
//! ```rust
//! use webkiosk_shell::{launch, DefaultBundleFactory, KioskConfig, TestDisplay, TestHost};
//!
//! let config: KioskConfig = serde_json::from_str(
//!     r#"{ "routes": [ { "prefix": "/assets/", "bundle": { "type": "memory" } } ] }"#,
//! )
//! .unwrap();
//!
//! let mut host = TestHost::new();
//! let mut display = TestDisplay::new();
//! let kiosk = launch(&config, &mut host, &mut display, &DefaultBundleFactory).unwrap();
//!
//! assert_eq!(
//!     kiosk.start_url(),
//!     "https://appassets.localhost/assets/index.html"
//! );
//! ```

mod config;
mod display;
mod error;
pub mod host;
mod kiosk;
mod settings;
mod test_host;

pub use config::{BundleFactory, BundleSource, DefaultBundleFactory, KioskConfig, RouteConfig};
pub use display::{ChromeStrategy, DisplayConfig};
pub use error::ShellError;
pub use host::{
    ChromeHandler, DefaultChromeHandler, DisplayHost, HostError, PageEvent, RequestInterceptor,
    WebHost,
};
pub use kiosk::{launch, Kiosk};
pub use settings::{HostSettings, MixedContentPolicy, RendererPriority};
pub use test_host::{TestDisplay, TestHost};
