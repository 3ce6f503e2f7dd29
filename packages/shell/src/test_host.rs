//! In-memory collaborators for testing the shell without a real web view.

use std::sync::Arc;

use webkiosk_bridge::AssetResponse;

use crate::{
    ChromeHandler, ChromeStrategy, DisplayHost, HostError, HostSettings, RequestInterceptor,
    WebHost,
};

/// Test web content host with recorded state.
///
/// Records every command the shell issues, in order, and lets tests
/// drive resource fetches through the installed interceptor the way a
/// real host's worker threads would.
#[derive(Default)]
pub struct TestHost {
    applied_settings: Vec<HostSettings>,
    navigations: Vec<String>,
    interceptor: Option<Arc<dyn RequestInterceptor>>,
    chrome_handler: Option<Arc<dyn ChromeHandler>>,
    event_log: Vec<String>,
}

impl TestHost {
    /// Create a new empty test host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings applied so far, oldest first.
    pub fn applied_settings(&self) -> &[HostSettings] {
        &self.applied_settings
    }

    /// URLs navigated to, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    /// The installed interceptor, if any.
    pub fn interceptor(&self) -> Option<&Arc<dyn RequestInterceptor>> {
        self.interceptor.as_ref()
    }

    /// The installed chrome handler, if any.
    pub fn chrome_handler(&self) -> Option<&Arc<dyn ChromeHandler>> {
        self.chrome_handler.as_ref()
    }

    /// Every command received, in order.
    pub fn events(&self) -> &[String] {
        &self.event_log
    }

    /// Resolve a request the way the host's network stack would: through
    /// the interceptor, falling back to nothing for this origin.
    pub fn fetch(&self, url: &str) -> Option<AssetResponse> {
        self.interceptor.as_ref()?.intercept(url)
    }
}

impl WebHost for TestHost {
    fn apply_settings(&mut self, settings: &HostSettings) -> Result<(), HostError> {
        self.applied_settings.push(settings.clone());
        self.event_log.push("apply_settings".to_string());
        Ok(())
    }

    fn set_chrome_handler(&mut self, handler: Arc<dyn ChromeHandler>) -> Result<(), HostError> {
        self.chrome_handler = Some(handler);
        self.event_log.push("set_chrome_handler".to_string());
        Ok(())
    }

    fn set_interceptor(
        &mut self,
        interceptor: Arc<dyn RequestInterceptor>,
    ) -> Result<(), HostError> {
        self.interceptor = Some(interceptor);
        self.event_log.push("set_interceptor".to_string());
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<(), HostError> {
        self.navigations.push(url.to_string());
        self.event_log.push(format!("navigate {}", url));
        Ok(())
    }
}

/// Test display shell with recorded state.
#[derive(Debug, Default)]
pub struct TestDisplay {
    chrome_hidden: Option<ChromeStrategy>,
    keep_screen_on: Option<bool>,
}

impl TestDisplay {
    /// Create a new test display.
    pub fn new() -> Self {
        Self::default()
    }

    /// The strategy chrome was hidden with, if it was.
    pub fn chrome_hidden(&self) -> Option<&ChromeStrategy> {
        self.chrome_hidden.as_ref()
    }

    /// The last keep-screen-on command, if any.
    pub fn keep_screen_on(&self) -> Option<bool> {
        self.keep_screen_on
    }
}

impl DisplayHost for TestDisplay {
    fn hide_system_chrome(&mut self, strategy: &ChromeStrategy) -> Result<(), HostError> {
        self.chrome_hidden = Some(*strategy);
        Ok(())
    }

    fn set_keep_screen_on(&mut self, keep_on: bool) -> Result<(), HostError> {
        self.keep_screen_on = Some(keep_on);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut host = TestHost::new();
        host.apply_settings(&HostSettings::default()).unwrap();
        host.navigate("https://appassets.localhost/assets/index.html")
            .unwrap();

        assert_eq!(host.applied_settings().len(), 1);
        assert_eq!(host.events().len(), 2);
        assert!(host.events()[1].starts_with("navigate"));
    }

    #[test]
    fn fetch_without_interceptor_is_none() {
        let host = TestHost::new();
        assert!(host.fetch("https://appassets.localhost/assets/x").is_none());
    }

    #[test]
    fn display_records_commands() {
        let mut display = TestDisplay::new();
        display
            .hide_system_chrome(&ChromeStrategy::default())
            .unwrap();
        display.set_keep_screen_on(true).unwrap();

        assert!(display.chrome_hidden().is_some());
        assert_eq!(display.keep_screen_on(), Some(true));
    }
}
