//! The resolved content of an intercepted request.

use bytes::Bytes;

use crate::MediaType;

/// Resolved asset content: bytes plus the media type to serve them as.
///
/// This is what the bridge hands back to the web content host in place
/// of a network response. The bytes are reference-counted, so cloning a
/// response (or serving the same asset repeatedly) does not copy the
/// payload.
#[derive(Clone, PartialEq, Eq)]
pub struct AssetResponse {
    data: Bytes,
    media_type: MediaType,
}

impl AssetResponse {
    /// Create a response from bytes and a media type.
    pub fn new(data: impl Into<Bytes>, media_type: MediaType) -> Self {
        Self {
            data: data.into(),
            media_type,
        }
    }

    /// The response payload.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Consume the response, returning the payload.
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// The media type the payload should be served as.
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Debug for AssetResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetResponse")
            .field("len", &self.data.len())
            .field("media_type", &self.media_type)
            .finish()
    }
}
