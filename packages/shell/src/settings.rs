//! Host settings: the one-time configuration applied to the web content host.

use serde::{Deserialize, Serialize};

/// How the host treats HTTPS pages that reference plain-HTTP content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixedContentPolicy {
    /// Block all mixed content.
    NeverAllow,
    /// Allow the safer kinds of mixed content (images, media) while
    /// blocking scripts. The kiosk default.
    #[default]
    Compatibility,
    /// Allow everything.
    AlwaysAllow,
}

/// Scheduling priority the host assigns to its renderer process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererPriority {
    /// Renderer may be deprioritized when not visible.
    Waived,
    /// Priority follows the host's visibility.
    Bound,
    /// Always important; a kiosk has nothing else to run.
    #[default]
    Important,
}

/// Boolean and enum toggles applied to the web content host once at
/// startup.
///
/// The defaults are the kiosk posture: scripting and DOM storage on
/// (the bundled application needs both), every raw filesystem access
/// path off. Bundled assets are reachable only through the virtual
/// origin bridge, never through `file://` URLs - [`crate::launch`]
/// refuses configurations that violate this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Enable JavaScript execution.
    pub javascript_enabled: bool,
    /// Enable DOM storage (localStorage, sessionStorage).
    pub dom_storage_enabled: bool,
    /// Allow the host to load `file://` URLs.
    pub file_access_allowed: bool,
    /// Allow the host to load content-provider style URLs.
    pub content_access_allowed: bool,
    /// Allow pages loaded from `file://` to read other file URLs.
    pub file_url_access_allowed: bool,
    /// Allow pages loaded from `file://` to reach any origin.
    pub universal_file_url_access_allowed: bool,
    /// Mixed-content policy for HTTPS pages.
    pub mixed_content: MixedContentPolicy,
    /// Enable the host's safe-browsing checks.
    pub safe_browsing_enabled: bool,
    /// Enable pinch-zoom and zoom controls.
    pub zoom_enabled: bool,
    /// Renderer process priority.
    pub renderer_priority: RendererPriority,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            file_access_allowed: false,
            content_access_allowed: false,
            file_url_access_allowed: false,
            universal_file_url_access_allowed: false,
            mixed_content: MixedContentPolicy::default(),
            safe_browsing_enabled: true,
            zoom_enabled: false,
            renderer_priority: RendererPriority::default(),
        }
    }
}

impl HostSettings {
    /// True if any raw file-URL access path is enabled.
    ///
    /// Local assets must be reachable only through the virtual-origin
    /// bridge; a configuration where this returns true cannot be
    /// launched.
    pub fn allows_raw_file_urls(&self) -> bool {
        self.file_access_allowed
            || self.file_url_access_allowed
            || self.universal_file_url_access_allowed
    }
}
