use super::{run_filter, CompressorPlugin};
use crate::constants::{DEFAULT_GIF_OPTIMIZE_LEVEL, GIFSICLE_BIN};
use crate::error::Result;

/// Palette-based raster compressor: filters the payload through an external
/// `gifsicle` process.
pub struct GifOptimizer {
    level: u8,
}

impl GifOptimizer {
    pub fn new() -> Self {
        Self {
            level: DEFAULT_GIF_OPTIMIZE_LEVEL,
        }
    }

    /// Build with an explicit gifsicle optimization level (1-3).
    pub fn with_level(level: u8) -> Self {
        Self {
            level: level.clamp(1, 3),
        }
    }
}

impl Default for GifOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressorPlugin for GifOptimizer {
    fn name(&self) -> &'static str {
        "gifsicle"
    }

    fn accepts(&self, data: &[u8]) -> bool {
        data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a")
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let level = format!("-O{}", self.level);
        run_filter(GIFSICLE_BIN, &[&level, "--no-warnings"], data)
    }
}
