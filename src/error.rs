use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("External tool '{tool}' not available: {source}")]
    ToolUnavailable {
        tool: &'static str,
        source: std::io::Error,
    },

    #[error("External tool '{tool}' failed ({status}): {stderr}")]
    ToolFailed {
        tool: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Streaming contents are not supported: {0}")]
    StreamingUnsupported(PathBuf),

    #[error("Failed to minify {path}: {source}")]
    CompressionFailed {
        path: PathBuf,
        source: Box<MinifyError>,
    },

    #[error("Optimizer task aborted: {0}")]
    TaskAborted(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    GlobError(#[from] glob::GlobError),
}

impl MinifyError {
    /// Wrap a plugin-level failure with the path of the record being
    /// processed, preserving the original cause.
    pub fn compression_failed(path: PathBuf, source: MinifyError) -> Self {
        MinifyError::CompressionFailed {
            path,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, MinifyError>;
