//! Export hand-off - turning the displayed shapes into an image handle.
//!
//! Rasterizing is the host's job. The core only defines the seam
//! ([`Exporter`]) and the opaque handle it produces ([`ExportedImage`]), a
//! PNG data URL like the one a browser canvas hands out.

use crate::constants::PNG_DATA_URL_PREFIX;
use crate::error::WhiteboardResult;
use crate::shape::ShapeCollection;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Renders a snapshot to a raster image.
pub trait Exporter {
    fn export(&self, shapes: &ShapeCollection) -> WhiteboardResult<ExportedImage>;
}

/// An exported image, as a URL (normally `data:image/png;base64,...`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportedImage(String);

impl ExportedImage {
    /// Wrap encoded PNG bytes as a data URL.
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        Self(format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(bytes)))
    }

    /// Wrap an existing image URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded PNG bytes, if this is a base64 PNG data URL.
    pub fn png_bytes(&self) -> Option<Vec<u8>> {
        let payload = self.0.strip_prefix(PNG_DATA_URL_PREFIX)?;
        STANDARD.decode(payload).ok()
    }

    pub fn is_data_url(&self) -> bool {
        self.0.starts_with("data:")
    }
}
