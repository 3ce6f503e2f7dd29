//! The asset loader: intercepts request URLs and routes them to handlers.

use url::Url;

use crate::{AssetPath, AssetResponse, BridgeError, PathHandler};

/// Default virtual origin host for bundled assets.
///
/// A synthetic name with no real endpoint behind it; requests to it only
/// ever resolve through the loader.
pub const DEFAULT_DOMAIN: &str = "appassets.localhost";

struct Route {
    prefix: AssetPath,
    handler: Box<dyn PathHandler>,
}

/// Intercepts resource requests and serves registered prefixes from
/// local asset content.
///
/// Built once at startup via [`AssetLoader::builder`] and immutable
/// thereafter. `intercept` takes `&self` and touches no shared mutable
/// state, so the host may call it concurrently from any number of worker
/// threads without synchronization.
///
/// For each request exactly one handler is consulted: the first
/// registered prefix that matches the request path. Everything else -
/// foreign origins, unregistered prefixes, missing assets, handler
/// failures - is answered with `None`, the pass-through signal, and the
/// distinctions between those cases are deliberately not observable.
pub struct AssetLoader {
    domain: String,
    allow_http: bool,
    routes: Vec<Route>,
}

impl AssetLoader {
    /// Start building a loader.
    pub fn builder() -> AssetLoaderBuilder {
        AssetLoaderBuilder::new()
    }

    /// The virtual origin host this loader answers for.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Number of registered path handlers.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// The HTTPS URL under the virtual origin for a bundle-relative path.
    pub fn url_for(&self, path: &AssetPath) -> String {
        format!("https://{}/{}", self.domain, path)
    }

    /// Answer an intercepted request.
    ///
    /// Returns the resolved content, or `None` to signal "not handled"
    /// so the caller falls back to its own (for this origin, failing)
    /// resolution. Never panics and never surfaces an error: each call
    /// is independent and idempotent.
    pub fn intercept(&self, request_url: &str) -> Option<AssetResponse> {
        let url = Url::parse(request_url).ok()?;

        match url.scheme() {
            "https" => {}
            "http" if self.allow_http => {}
            _ => return None,
        }

        if url.host_str() != Some(self.domain.as_str()) {
            return None;
        }

        let path = match AssetPath::parse(url.path()) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("rejected request path {}: {}", url.path(), e);
                return None;
            }
        };

        let (route, suffix) = self.route_for(&path)?;
        match route.handler.handle(&suffix) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("handler for /{} failed on '{}': {}", route.prefix, suffix, e);
                None
            }
        }
    }

    /// First registered route whose prefix matches, with the stripped suffix.
    fn route_for(&self, path: &AssetPath) -> Option<(&Route, AssetPath)> {
        self.routes
            .iter()
            .find_map(|route| path.strip_prefix(&route.prefix).map(|suffix| (route, suffix)))
    }
}

impl std::fmt::Debug for AssetLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetLoader")
            .field("domain", &self.domain)
            .field("allow_http", &self.allow_http)
            .field(
                "prefixes",
                &self
                    .routes
                    .iter()
                    .map(|r| r.prefix.to_string())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for [`AssetLoader`].
///
/// Handlers are registered in order; registration order is match order.
/// Prefix strings are validated in [`build`](Self::build).
pub struct AssetLoaderBuilder {
    domain: String,
    allow_http: bool,
    routes: Vec<(String, Box<dyn PathHandler>)>,
}

impl AssetLoaderBuilder {
    /// New builder with the default domain and HTTPS-only interception.
    pub fn new() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            allow_http: false,
            routes: Vec::new(),
        }
    }

    /// Set the virtual origin host (stored lowercased, as URL hosts
    /// compare case-insensitively).
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into().to_ascii_lowercase();
        self
    }

    /// Also intercept plain-http URLs on the virtual origin.
    pub fn allow_http(mut self, allow: bool) -> Self {
        self.allow_http = allow;
        self
    }

    /// Register a handler for a path prefix, e.g. `"/assets/"`.
    pub fn add_handler(mut self, prefix: &str, handler: impl PathHandler + 'static) -> Self {
        self.routes.push((prefix.to_string(), Box::new(handler)));
        self
    }

    /// Validate prefixes and produce the immutable loader.
    pub fn build(self) -> Result<AssetLoader, BridgeError> {
        if self.domain.is_empty() {
            return Err(BridgeError::Other {
                message: "virtual origin domain must not be empty".to_string(),
            });
        }

        let mut routes = Vec::with_capacity(self.routes.len());
        for (prefix, handler) in self.routes {
            let prefix = AssetPath::parse(&prefix)?;
            routes.push(Route { prefix, handler });
        }

        Ok(AssetLoader {
            domain: self.domain,
            allow_http: self.allow_http,
            routes,
        })
    }
}

impl Default for AssetLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{asset_path, BundleHandler, MediaType};
    use webkiosk_bundle::MemoryBundle;

    struct FailingHandler;

    impl PathHandler for FailingHandler {
        fn handle(&self, _path: &AssetPath) -> Result<Option<AssetResponse>, BridgeError> {
            Err(BridgeError::Other {
                message: "backend unavailable".to_string(),
            })
        }
    }

    fn scene_bundle() -> MemoryBundle {
        let mut bundle = MemoryBundle::new();
        bundle.insert("index.html", &b"<!doctype html><script src=js/app.js></script>"[..]);
        bundle.insert("js/app.js", &b"scene.render()"[..]);
        bundle.insert("models/ship.glb", &b"glTF-binary-data"[..]);
        bundle
    }

    fn scene_loader() -> AssetLoader {
        AssetLoader::builder()
            .add_handler("/assets/", BundleHandler::new(scene_bundle()))
            .build()
            .unwrap()
    }

    #[test]
    fn resolves_registered_asset() {
        let loader = scene_loader();

        let resp = loader
            .intercept("https://appassets.localhost/assets/index.html")
            .unwrap();
        assert_eq!(resp.media_type(), &MediaType::HTML);
        assert!(resp.data().starts_with(b"<!doctype html>"));
    }

    #[test]
    fn foreign_origin_passes_through() {
        let loader = scene_loader();
        assert!(loader.intercept("https://example.com/assets/index.html").is_none());
    }

    #[test]
    fn unregistered_prefix_passes_through() {
        let loader = scene_loader();
        assert!(loader.intercept("https://appassets.localhost/other/x").is_none());
    }

    #[test]
    fn missing_asset_passes_through() {
        let loader = scene_loader();
        // Indistinguishable from the unregistered-prefix case by design.
        assert!(loader
            .intercept("https://appassets.localhost/assets/js/missing.js")
            .is_none());
    }

    #[test]
    fn scheme_rules() {
        let loader = scene_loader();
        assert!(loader.intercept("http://appassets.localhost/assets/index.html").is_none());
        assert!(loader.intercept("file:///assets/index.html").is_none());
        assert!(loader.intercept("not a url at all").is_none());

        let permissive = AssetLoader::builder()
            .allow_http(true)
            .add_handler("/assets/", BundleHandler::new(scene_bundle()))
            .build()
            .unwrap();
        assert!(permissive
            .intercept("http://appassets.localhost/assets/index.html")
            .is_some());
    }

    #[test]
    fn custom_domain() {
        let loader = AssetLoader::builder()
            .domain("Scene.Example.Net")
            .add_handler("/assets/", BundleHandler::new(scene_bundle()))
            .build()
            .unwrap();

        assert_eq!(loader.domain(), "scene.example.net");
        assert!(loader
            .intercept("https://scene.example.net/assets/index.html")
            .is_some());
        assert!(loader
            .intercept("https://appassets.localhost/assets/index.html")
            .is_none());
    }

    #[test]
    fn traversal_passes_through() {
        let loader = scene_loader();

        // The URL parser resolves literal dot segments against the
        // absolute path before interception, so they can rename a
        // request but never climb past the origin root.
        assert!(loader
            .intercept("https://appassets.localhost/assets/../../outside.txt")
            .is_none());
        assert!(loader
            .intercept("https://appassets.localhost/assets/js/../../../outside.txt")
            .is_none());

        // Percent-encoded dot segments survive URL parsing and are
        // rejected during path validation.
        assert!(loader
            .intercept("https://appassets.localhost/assets/%2e%2e/secret")
            .is_none());
        assert!(loader
            .intercept("https://appassets.localhost/assets/js/..%2f..%2fsecret")
            .is_none());
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let loader = scene_loader();
        let resp = loader
            .intercept("https://appassets.localhost/assets/js/app.js?v=3#top")
            .unwrap();
        assert_eq!(resp.media_type(), &MediaType::JAVASCRIPT);
    }

    #[test]
    fn first_registered_prefix_wins() {
        let mut everything = MemoryBundle::new();
        everything.insert("assets/index.html", &b"from-root-handler"[..]);

        let loader = AssetLoader::builder()
            .add_handler("/", BundleHandler::new(everything))
            .add_handler("/assets/", BundleHandler::new(scene_bundle()))
            .build()
            .unwrap();

        // The root handler was registered first, so it is the one
        // consulted - the /assets/ handler never sees the request.
        let resp = loader
            .intercept("https://appassets.localhost/assets/index.html")
            .unwrap();
        assert_eq!(resp.data().as_ref(), b"from-root-handler");
    }

    #[test]
    fn exactly_one_handler_consulted() {
        // The first matching handler fails; the request must NOT fall
        // through to the second one.
        let loader = AssetLoader::builder()
            .add_handler("/assets/", FailingHandler)
            .add_handler("/assets/", BundleHandler::new(scene_bundle()))
            .build()
            .unwrap();

        assert!(loader
            .intercept("https://appassets.localhost/assets/index.html")
            .is_none());
    }

    #[test]
    fn handler_error_passes_through() {
        let loader = AssetLoader::builder()
            .add_handler("/broken/", FailingHandler)
            .build()
            .unwrap();

        assert!(loader.intercept("https://appassets.localhost/broken/x").is_none());
    }

    #[test]
    fn repeated_requests_are_byte_identical() {
        let loader = scene_loader();
        let url = "https://appassets.localhost/assets/models/ship.glb";

        let first = loader.intercept(url).unwrap();
        let second = loader.intercept(url).unwrap();
        assert_eq!(first.data(), second.data());
        assert_eq!(first.media_type(), second.media_type());
    }

    #[test]
    fn concurrent_lookups_do_not_cross_talk() {
        let mut bundle = MemoryBundle::new();
        let assets: Vec<(String, String)> = (0..16)
            .map(|i| (format!("data/item{}.json", i), format!("{{\"id\":{}}}", i)))
            .collect();
        for (path, body) in &assets {
            bundle.insert(path, body.clone().into_bytes());
        }

        let loader = AssetLoader::builder()
            .add_handler("/assets/", BundleHandler::new(bundle))
            .build()
            .unwrap();

        std::thread::scope(|scope| {
            for (path, body) in &assets {
                let loader = &loader;
                scope.spawn(move || {
                    for _ in 0..30 {
                        let url = format!("https://appassets.localhost/assets/{}", path);
                        let resp = loader.intercept(&url).unwrap();
                        assert_eq!(resp.data().as_ref(), body.as_bytes());
                        assert_eq!(resp.media_type(), &MediaType::JSON);
                    }
                });
            }
        });
    }

    #[test]
    fn builder_rejects_invalid_prefix() {
        let result = AssetLoader::builder()
            .add_handler("/assets/../", BundleHandler::new(MemoryBundle::new()))
            .build();
        assert!(matches!(result, Err(BridgeError::Path(_))));
    }

    #[test]
    fn builder_rejects_empty_domain() {
        let result = AssetLoader::builder().domain("").build();
        assert!(result.is_err());
    }

    #[test]
    fn empty_loader_passes_everything_through() {
        let loader = AssetLoader::builder().build().unwrap();
        assert!(loader.intercept("https://appassets.localhost/assets/x").is_none());
        assert_eq!(loader.route_count(), 0);
    }

    #[test]
    fn url_for_joins_domain_and_path() {
        let loader = scene_loader();
        assert_eq!(
            loader.url_for(&asset_path!("assets/index.html")),
            "https://appassets.localhost/assets/index.html"
        );
    }

    #[test]
    fn loader_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AssetLoader>();
    }
}
