//! Startup wiring: build the loader, configure the collaborators, navigate.

use std::sync::Arc;

use webkiosk_bridge::{AssetLoader, AssetPath, BridgeError, BundleHandler};

use crate::{
    BundleFactory, DefaultChromeHandler, DisplayHost, KioskConfig, ShellError, WebHost,
};

/// A launched kiosk: the immutable loader and the URL it navigated to.
///
/// The loader is shared with the host through an `Arc`; the shell keeps
/// its own handle so callers can inspect routes after launch. Dropped
/// when the embedding shell is destroyed.
pub struct Kiosk {
    loader: Arc<AssetLoader>,
    start_url: String,
}

impl std::fmt::Debug for Kiosk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kiosk")
            .field("start_url", &self.start_url)
            .finish_non_exhaustive()
    }
}

impl Kiosk {
    /// The asset loader installed on the host.
    pub fn loader(&self) -> &Arc<AssetLoader> {
        &self.loader
    }

    /// The initial navigation target:
    /// `https://<domain>/<first-prefix>/<entry>`.
    pub fn start_url(&self) -> &str {
        &self.start_url
    }
}

/// Configure the collaborators and issue the initial navigation.
///
/// Runs exactly once, strictly before any interception call can occur:
/// settings are applied and the interceptor installed before `navigate`
/// is issued, establishing the before/after ordering the bridge relies
/// on.
///
/// Refuses to launch a configuration with no routes, or one whose
/// settings would let the host reach local files through raw `file://`
/// URLs alongside the virtual origin.
pub fn launch<H, D>(
    config: &KioskConfig,
    host: &mut H,
    display: &mut D,
    factory: &dyn BundleFactory,
) -> Result<Kiosk, ShellError>
where
    H: WebHost,
    D: DisplayHost,
{
    if config.routes.is_empty() {
        return Err(ShellError::NoRoutes);
    }
    if config.settings.allows_raw_file_urls() {
        return Err(ShellError::InsecureSettings {
            message: "raw file-URL access must stay disabled while the virtual origin bridge \
                      is installed"
                .to_string(),
        });
    }

    let mut builder = AssetLoader::builder()
        .domain(config.domain.as_str())
        .allow_http(config.allow_http);
    for route in &config.routes {
        let bundle = factory.create(&route.bundle)?;
        builder = builder.add_handler(&route.prefix, BundleHandler::new(bundle));
    }
    let loader = Arc::new(builder.build()?);

    let prefix = AssetPath::parse(&config.routes[0].prefix).map_err(BridgeError::from)?;
    let entry = AssetPath::parse(&config.entry).map_err(BridgeError::from)?;
    let start_url = loader.url_for(&prefix.join(&entry));

    host.apply_settings(&config.settings)?;
    host.set_chrome_handler(Arc::new(DefaultChromeHandler))?;
    host.set_interceptor(loader.clone())?;

    if config.display.fullscreen {
        display.hide_system_chrome(&config.display.chrome)?;
    }
    display.set_keep_screen_on(config.display.keep_screen_on)?;

    log::info!("kiosk launched, navigating to {}", start_url);
    host.navigate(&start_url)?;

    Ok(Kiosk { loader, start_url })
}
