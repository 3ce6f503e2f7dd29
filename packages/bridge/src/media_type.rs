//! Media types for resolved assets.

use std::borrow::Cow;
use std::fmt;

/// The MIME type attached to a resolved asset response.
///
/// Inferred from the request path's file extension; anything the table
/// doesn't know falls back to `application/octet-stream`, which lets the
/// web content host sniff or download it rather than fail the request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaType(pub Cow<'static, str>);

impl MediaType {
    // Documents and code
    pub const HTML: MediaType = MediaType(Cow::Borrowed("text/html"));
    pub const JAVASCRIPT: MediaType = MediaType(Cow::Borrowed("text/javascript"));
    pub const CSS: MediaType = MediaType(Cow::Borrowed("text/css"));
    pub const JSON: MediaType = MediaType(Cow::Borrowed("application/json"));
    pub const PLAIN: MediaType = MediaType(Cow::Borrowed("text/plain"));
    pub const XML: MediaType = MediaType(Cow::Borrowed("application/xml"));
    pub const WASM: MediaType = MediaType(Cow::Borrowed("application/wasm"));

    // Images
    pub const PNG: MediaType = MediaType(Cow::Borrowed("image/png"));
    pub const JPEG: MediaType = MediaType(Cow::Borrowed("image/jpeg"));
    pub const GIF: MediaType = MediaType(Cow::Borrowed("image/gif"));
    pub const SVG: MediaType = MediaType(Cow::Borrowed("image/svg+xml"));
    pub const WEBP: MediaType = MediaType(Cow::Borrowed("image/webp"));
    pub const ICON: MediaType = MediaType(Cow::Borrowed("image/x-icon"));

    // Fonts
    pub const WOFF: MediaType = MediaType(Cow::Borrowed("font/woff"));
    pub const WOFF2: MediaType = MediaType(Cow::Borrowed("font/woff2"));
    pub const TTF: MediaType = MediaType(Cow::Borrowed("font/ttf"));
    pub const OTF: MediaType = MediaType(Cow::Borrowed("font/otf"));

    // 3D scene content
    pub const GLTF: MediaType = MediaType(Cow::Borrowed("model/gltf+json"));
    pub const GLB: MediaType = MediaType(Cow::Borrowed("model/gltf-binary"));
    pub const KTX2: MediaType = MediaType(Cow::Borrowed("image/ktx2"));
    pub const RADIANCE_HDR: MediaType = MediaType(Cow::Borrowed("image/vnd.radiance"));

    // Audio and video
    pub const MPEG_AUDIO: MediaType = MediaType(Cow::Borrowed("audio/mpeg"));
    pub const OGG_AUDIO: MediaType = MediaType(Cow::Borrowed("audio/ogg"));
    pub const WAV: MediaType = MediaType(Cow::Borrowed("audio/wav"));
    pub const MP4: MediaType = MediaType(Cow::Borrowed("video/mp4"));
    pub const WEBM: MediaType = MediaType(Cow::Borrowed("video/webm"));

    /// Opaque binary data (`application/octet-stream`).
    pub const OCTET_STREAM: MediaType = MediaType(Cow::Borrowed("application/octet-stream"));

    /// Create a media type from a static string.
    pub const fn from_static(s: &'static str) -> Self {
        MediaType(Cow::Borrowed(s))
    }

    /// Create a media type from an owned string.
    pub fn new(s: impl Into<String>) -> Self {
        MediaType(Cow::Owned(s.into()))
    }

    /// Get the media type string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Look up the media type for a file extension (case-insensitive).
    ///
    /// Returns `None` for extensions the table doesn't know.
    pub fn from_extension(ext: &str) -> Option<MediaType> {
        let lower = ext.to_ascii_lowercase();
        let media_type = match lower.as_str() {
            "html" | "htm" => Self::HTML,
            "js" | "mjs" => Self::JAVASCRIPT,
            "css" => Self::CSS,
            "json" | "map" => Self::JSON,
            "txt" => Self::PLAIN,
            "xml" => Self::XML,
            "wasm" => Self::WASM,
            "png" => Self::PNG,
            "jpg" | "jpeg" => Self::JPEG,
            "gif" => Self::GIF,
            "svg" => Self::SVG,
            "webp" => Self::WEBP,
            "ico" => Self::ICON,
            "woff" => Self::WOFF,
            "woff2" => Self::WOFF2,
            "ttf" => Self::TTF,
            "otf" => Self::OTF,
            "gltf" => Self::GLTF,
            "glb" => Self::GLB,
            "ktx2" => Self::KTX2,
            "hdr" => Self::RADIANCE_HDR,
            "mp3" => Self::MPEG_AUDIO,
            "ogg" | "oga" => Self::OGG_AUDIO,
            "wav" => Self::WAV,
            "mp4" => Self::MP4,
            "webm" => Self::WEBM,
            "bin" => Self::OCTET_STREAM,
            _ => return None,
        };
        Some(media_type)
    }

    /// Infer the media type for a request path from its extension,
    /// falling back to `application/octet-stream`.
    pub fn for_path(path: &crate::AssetPath) -> MediaType {
        path.extension()
            .and_then(Self::from_extension)
            .unwrap_or(Self::OCTET_STREAM)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&'static str> for MediaType {
    fn from(s: &'static str) -> Self {
        MediaType(Cow::Borrowed(s))
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        MediaType(Cow::Owned(s))
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
