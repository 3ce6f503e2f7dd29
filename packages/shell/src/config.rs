//! Kiosk configuration: the JSON-loadable description of a launch.
//!
//! Route configurations are small tagged objects:
//! ```json
//! {"type": "dir", "path": "/opt/kiosk/www"}
//! {"type": "memory"}
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use webkiosk_bridge::DEFAULT_DOMAIN;
use webkiosk_bundle::{AssetBundle, DirBundle, MemoryBundle};

use crate::{DisplayConfig, HostSettings, ShellError};

/// Where a route's assets come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BundleSource {
    /// Directory of built web assets.
    Dir { path: String },
    /// Empty in-memory bundle (filled by code, mainly for tests).
    Memory,
}

/// One virtual path prefix mapped to a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Virtual path prefix, e.g. `"/assets/"`.
    pub prefix: String,
    /// The bundle serving that prefix.
    pub bundle: BundleSource,
}

/// A factory for creating bundles from route configurations.
pub trait BundleFactory {
    fn create(&self, source: &BundleSource) -> Result<Box<dyn AssetBundle>, ShellError>;
}

/// Factory covering the built-in bundle sources.
#[derive(Debug, Default)]
pub struct DefaultBundleFactory;

impl BundleFactory for DefaultBundleFactory {
    fn create(&self, source: &BundleSource) -> Result<Box<dyn AssetBundle>, ShellError> {
        match source {
            BundleSource::Dir { path } => Ok(Box::new(DirBundle::new(path.as_str())?)),
            BundleSource::Memory => Ok(Box::new(MemoryBundle::new())),
        }
    }
}

/// Everything a launch needs, constructed once and never mutated after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Virtual origin host for bundled assets.
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Also intercept plain-http URLs on the virtual origin.
    #[serde(default)]
    pub allow_http: bool,
    /// Prefix-to-bundle mappings, in match order.
    pub routes: Vec<RouteConfig>,
    /// Entry file under the first route's prefix.
    #[serde(default = "default_entry")]
    pub entry: String,
    /// Web content host settings.
    #[serde(default)]
    pub settings: HostSettings,
    /// Display commands.
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_entry() -> String {
    "index.html".to_string()
}

impl KioskConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ShellError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ShellError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|error| ShellError::ConfigIo {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChromeStrategy, MixedContentPolicy};

    #[test]
    fn minimal_config_fills_defaults() {
        let config = KioskConfig::from_json(
            r#"{ "routes": [ { "prefix": "/assets/", "bundle": { "type": "memory" } } ] }"#,
        )
        .unwrap();

        assert_eq!(config.domain, "appassets.localhost");
        assert!(!config.allow_http);
        assert_eq!(config.entry, "index.html");
        assert!(config.settings.javascript_enabled);
        assert!(config.display.fullscreen);
    }

    #[test]
    fn full_config_parses() {
        let config = KioskConfig::from_json(
            r#"{
                "domain": "scene.example.net",
                "allow_http": true,
                "routes": [
                    { "prefix": "/assets/", "bundle": { "type": "dir", "path": "/opt/kiosk/www" } },
                    { "prefix": "/fallback/", "bundle": { "type": "memory" } }
                ],
                "entry": "app/index.html",
                "settings": { "zoom_enabled": true, "mixed_content": "never_allow" },
                "display": {
                    "fullscreen": false,
                    "chrome": { "strategy": "legacy_visibility_flags", "immersive_sticky": true }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.routes.len(), 2);
        assert_eq!(
            config.routes[0].bundle,
            BundleSource::Dir {
                path: "/opt/kiosk/www".to_string()
            }
        );
        assert_eq!(config.settings.mixed_content, MixedContentPolicy::NeverAllow);
        assert!(!config.display.fullscreen);
        assert!(matches!(
            config.display.chrome,
            ChromeStrategy::LegacyVisibilityFlags { .. }
        ));
    }

    #[test]
    fn missing_routes_is_a_parse_error() {
        assert!(KioskConfig::from_json("{}").is_err());
    }

    #[test]
    fn config_round_trips() {
        let config = KioskConfig::from_json(
            r#"{ "routes": [ { "prefix": "/assets/", "bundle": { "type": "memory" } } ] }"#,
        )
        .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back = KioskConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn from_json_file_reports_the_path() {
        let err = KioskConfig::from_json_file("/no/such/kiosk.json").unwrap_err();
        assert!(err.to_string().contains("/no/such/kiosk.json"));
    }

    #[test]
    fn factory_creates_builtin_sources() {
        let factory = DefaultBundleFactory;

        let bundle = factory.create(&BundleSource::Memory).unwrap();
        assert!(bundle.open(&["anything"]).unwrap().is_none());

        let missing = factory.create(&BundleSource::Dir {
            path: "/no/such/dir".to_string(),
        });
        assert!(matches!(missing, Err(ShellError::Bundle(_))));
    }

    #[test]
    fn factory_creates_dir_bundles() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), b"<html>").unwrap();

        let factory = DefaultBundleFactory;
        let bundle = factory
            .create(&BundleSource::Dir {
                path: dir.path().to_string_lossy().into_owned(),
            })
            .unwrap();
        assert!(bundle.open(&["index.html"]).unwrap().is_some());
    }
}
