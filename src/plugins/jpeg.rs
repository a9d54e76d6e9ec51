use super::CompressorPlugin;
use crate::constants::DEFAULT_JPEG_QUALITY;
use crate::error::Result;
use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Lossy raster compressor: decodes the JPEG and re-encodes it at a fixed
/// quality through the `image` crate's codec.
pub struct JpegRecompressor {
    quality: u8,
}

impl JpegRecompressor {
    pub fn new() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Build with an explicit re-encode quality (1-100).
    pub fn with_quality(quality: u8) -> Self {
        Self { quality }
    }
}

impl Default for JpegRecompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressorPlugin for JpegRecompressor {
    fn name(&self) -> &'static str {
        "jpeg-recompress"
    }

    fn accepts(&self, data: &[u8]) -> bool {
        data.starts_with(JPEG_MAGIC)
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let img = image::load_from_memory_with_format(data, ImageFormat::Jpeg)?;
        let mut out = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut out, self.quality);
        img.write_with_encoder(encoder)?;
        Ok(out)
    }
}
