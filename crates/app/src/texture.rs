//! User-supplied surface texture.
//!
//! The only validation is "is this an image file": the byte stream must
//! carry a recognizable image magic. Decoding and upload belong to the
//! rendering host.

use image::ImageFormat;
use thiserror::Error;

/// The supplied bytes did not look like any known image format.
#[derive(Debug, Error)]
#[error("not an image file")]
pub struct TextureError;

/// An accepted texture: raw bytes plus the sniffed format.
#[derive(Debug, Clone)]
pub struct Texture {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl Texture {
    /// Accepts bytes whose magic identifies a known image format.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, TextureError> {
        let format = image::guess_format(&bytes).map_err(|_| TextureError)?;
        Ok(Self { bytes, format })
    }

    /// The raw image bytes, for handing to the renderer.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The sniffed image format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }
}
