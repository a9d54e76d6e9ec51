use super::{run_filter, CompressorPlugin};
use crate::constants::{SVGO_BIN, SVG_SNIFF_WINDOW};
use crate::error::Result;

/// Vector/markup compressor: filters the payload through an external `svgo`
/// process.
pub struct SvgMinifier;

impl SvgMinifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SvgMinifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressorPlugin for SvgMinifier {
    fn name(&self) -> &'static str {
        "svgo"
    }

    fn accepts(&self, data: &[u8]) -> bool {
        let window = &data[..data.len().min(SVG_SNIFF_WINDOW)];
        let Ok(text) = std::str::from_utf8(window) else {
            return false;
        };
        let head = text.trim_start_matches('\u{feff}').trim_start();
        head.starts_with("<svg") || (head.starts_with("<?xml") && text.contains("<svg"))
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        run_filter(SVGO_BIN, &["--input", "-", "--output", "-"], data)
    }
}
