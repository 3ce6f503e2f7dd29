//! Capability traits for the shell's collaborators.
//!
//! The shell never talks to a concrete web view or window system; it
//! commands them through these traits. Each capability carries one
//! obligation, mirroring the callback interfaces the host frameworks
//! expose.

use std::sync::Arc;

use webkiosk_bridge::{AssetLoader, AssetResponse};

use crate::{ChromeStrategy, HostSettings};

/// Error type for host operations.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("host error: {0}")]
    Host(String),
}

/// Answers intercepted resource requests.
///
/// Installed once on the web content host, then invoked from its worker
/// threads - potentially many calls concurrently, out of order relative
/// to navigation. `Some` is resolved content; `None` tells the host to
/// fall back to its own resolution.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request_url: &str) -> Option<AssetResponse>;
}

impl RequestInterceptor for AssetLoader {
    fn intercept(&self, request_url: &str) -> Option<AssetResponse> {
        AssetLoader::intercept(self, request_url)
    }
}

/// Page-level events surfaced by the host's chrome.
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// A console message from the page.
    Console { message: String },
    /// Load progress, 0-100.
    Progress { percent: u8 },
    /// The document title changed.
    TitleChanged { title: String },
}

/// Receives page-level chrome events.
pub trait ChromeHandler: Send + Sync {
    fn on_page_event(&self, event: PageEvent);
}

/// Chrome handler that logs console output and drops the rest.
#[derive(Debug, Default)]
pub struct DefaultChromeHandler;

impl ChromeHandler for DefaultChromeHandler {
    fn on_page_event(&self, event: PageEvent) {
        if let PageEvent::Console { message } = event {
            log::debug!("page console: {}", message);
        }
    }
}

/// The embedded web content host collaborator.
///
/// The shell's obligations run strictly in this order, once: settings,
/// handlers, then the initial navigation. After `navigate` the host may
/// begin issuing intercept calls at any time.
pub trait WebHost {
    /// Apply configuration toggles.
    fn apply_settings(&mut self, settings: &HostSettings) -> Result<(), HostError>;

    /// Install the chrome event handler.
    fn set_chrome_handler(&mut self, handler: Arc<dyn ChromeHandler>) -> Result<(), HostError>;

    /// Install the exclusive request interceptor.
    fn set_interceptor(&mut self, interceptor: Arc<dyn RequestInterceptor>)
        -> Result<(), HostError>;

    /// Navigate to a URL.
    fn navigate(&mut self, url: &str) -> Result<(), HostError>;
}

/// The display/windowing shell collaborator.
///
/// One-shot commands; no data flows back.
pub trait DisplayHost {
    /// Hide system chrome using the given strategy.
    fn hide_system_chrome(&mut self, strategy: &ChromeStrategy) -> Result<(), HostError>;

    /// Keep the display continuously active.
    fn set_keep_screen_on(&mut self, keep_on: bool) -> Result<(), HostError>;
}
