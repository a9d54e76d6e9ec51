use super::CompressorPlugin;
use crate::constants::DEFAULT_PNG_PRESET;
use crate::error::{MinifyError, Result};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Lossless raster compressor backed by oxipng.
pub struct PngOptimizer {
    options: oxipng::Options,
}

impl PngOptimizer {
    pub fn new() -> Self {
        Self {
            options: oxipng::Options::from_preset(DEFAULT_PNG_PRESET),
        }
    }

    /// Build with caller-supplied oxipng options.
    pub fn with_options(options: oxipng::Options) -> Self {
        Self { options }
    }
}

impl Default for PngOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressorPlugin for PngOptimizer {
    fn name(&self) -> &'static str {
        "oxipng"
    }

    fn accepts(&self, data: &[u8]) -> bool {
        data.starts_with(PNG_MAGIC)
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        oxipng::optimize_from_memory(data, &self.options)
            .map_err(|e| MinifyError::PngOptimization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png() -> Vec<u8> {
        let img = image::DynamicImage::new_rgb8(16, 16);
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn accepts_only_png_magic() {
        let plugin = PngOptimizer::new();
        assert!(plugin.accepts(&encode_png()));
        assert!(!plugin.accepts(b"GIF89a......"));
        assert!(!plugin.accepts(b""));
    }

    #[test]
    fn compress_yields_valid_png() {
        let plugin = PngOptimizer::new();
        let out = plugin.compress(&encode_png()).unwrap();
        assert!(out.starts_with(PNG_MAGIC));
        image::load_from_memory_with_format(&out, image::ImageFormat::Png).unwrap();
    }

    #[test]
    fn compress_rejects_garbage() {
        let plugin = PngOptimizer::new();
        let mut garbage = PNG_MAGIC.to_vec();
        garbage.extend_from_slice(b"not actually a png");
        assert!(plugin.compress(&garbage).is_err());
    }
}
