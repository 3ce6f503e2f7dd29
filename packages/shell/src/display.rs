//! Display configuration: kiosk-mode chrome hiding and screen wake.

use serde::{Deserialize, Serialize};

/// How system chrome (status and navigation bars) is hidden.
///
/// Two variants because platforms expose two generations of API for the
/// same effect. The strategy is selected once at startup - never per
/// request, never per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ChromeStrategy {
    /// Modern insets-controller API: hide the bars and let a swipe from
    /// the edge reveal them transiently.
    InsetsController { transient_bars_by_swipe: bool },
    /// Legacy visibility-flags API with sticky immersive mode.
    LegacyVisibilityFlags { immersive_sticky: bool },
}

impl ChromeStrategy {
    /// Lowest platform API level with the insets-controller API.
    pub const INSETS_CONTROLLER_MIN_API: u32 = 30;

    /// Pick the strategy for a platform API level.
    pub fn select(api_level: u32) -> Self {
        if api_level >= Self::INSETS_CONTROLLER_MIN_API {
            ChromeStrategy::InsetsController {
                transient_bars_by_swipe: true,
            }
        } else {
            ChromeStrategy::LegacyVisibilityFlags {
                immersive_sticky: true,
            }
        }
    }
}

impl Default for ChromeStrategy {
    fn default() -> Self {
        ChromeStrategy::InsetsController {
            transient_bars_by_swipe: true,
        }
    }
}

/// One-shot display commands issued at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Hide system chrome for a fullscreen kiosk surface.
    pub fullscreen: bool,
    /// Keep the display awake while the shell is active.
    pub keep_screen_on: bool,
    /// How chrome is hidden when `fullscreen` is set.
    pub chrome: ChromeStrategy,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fullscreen: true,
            keep_screen_on: true,
            chrome: ChromeStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_selection_by_api_level() {
        assert_eq!(
            ChromeStrategy::select(34),
            ChromeStrategy::InsetsController {
                transient_bars_by_swipe: true
            }
        );
        assert_eq!(
            ChromeStrategy::select(30),
            ChromeStrategy::InsetsController {
                transient_bars_by_swipe: true
            }
        );
        assert_eq!(
            ChromeStrategy::select(29),
            ChromeStrategy::LegacyVisibilityFlags {
                immersive_sticky: true
            }
        );
    }

    #[test]
    fn defaults() {
        let d = DisplayConfig::default();
        assert!(d.fullscreen);
        assert!(d.keep_screen_on);
    }

    #[test]
    fn strategy_json_shape() {
        let json = serde_json::to_string(&ChromeStrategy::default()).unwrap();
        assert!(json.contains("\"strategy\":\"insets_controller\""));

        let parsed: ChromeStrategy = serde_json::from_str(
            r#"{"strategy": "legacy_visibility_flags", "immersive_sticky": false}"#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            ChromeStrategy::LegacyVisibilityFlags {
                immersive_sticky: false
            }
        );
    }
}
