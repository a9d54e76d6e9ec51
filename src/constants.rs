/// File extensions the adapter will hand to the compressor plugins.
/// Everything else passes through untouched.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg"];

/// Prefix for every log line the adapter emits.
pub const LOG_PREFIX: &str = "img-minify";

pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// gifsicle -O level for the default palette-raster plugin (1..=3).
pub const DEFAULT_GIF_OPTIMIZE_LEVEL: u8 = 2;

/// oxipng preset for the default lossless-raster plugin (0..=6).
pub const DEFAULT_PNG_PRESET: u8 = 2;

pub const GIFSICLE_BIN: &str = "gifsicle";
pub const SVGO_BIN: &str = "svgo";

/// How many bytes of a payload the SVG sniffer inspects.
pub const SVG_SNIFF_WINDOW: usize = 1024;

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";
