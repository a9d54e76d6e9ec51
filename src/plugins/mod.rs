//! Compressor plugins: one per supported image family.
//!
//! A plugin transforms raw image bytes into smaller (or equal) raw image
//! bytes for a single family. Plugins sniff the payload themselves, so a
//! list of plugins can be applied to an arbitrary buffer and only the
//! matching ones will touch it. PNG and JPEG run in-process; GIF and SVG
//! delegate to external tools (`gifsicle`, `svgo`) as stdin-to-stdout
//! filters.

mod gif;
mod jpeg;
mod png;
mod svg;

pub use gif::GifOptimizer;
pub use jpeg::JpegRecompressor;
pub use png::PngOptimizer;
pub use svg::SvgMinifier;

use crate::error::{MinifyError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// A capability that compresses raw image bytes for one image family.
pub trait CompressorPlugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Content sniff: whether this plugin recognizes the payload as its
    /// own family. Plugins never touch payloads they do not recognize.
    fn accepts(&self, data: &[u8]) -> bool;

    /// Compress the payload. The result may be larger than the input; the
    /// caller decides how to treat that.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Palette-based raster (GIF) plugin with default settings.
pub fn gif() -> Box<dyn CompressorPlugin> {
    Box::new(GifOptimizer::new())
}

/// Lossy raster (JPEG) plugin with default settings.
pub fn jpeg() -> Box<dyn CompressorPlugin> {
    Box::new(JpegRecompressor::new())
}

/// Lossless raster (PNG) plugin with default settings.
pub fn png() -> Box<dyn CompressorPlugin> {
    Box::new(PngOptimizer::new())
}

/// Vector/markup (SVG) plugin with default settings.
pub fn svg() -> Box<dyn CompressorPlugin> {
    Box::new(SvgMinifier::new())
}

/// The default plugin list: one instance per supported extension family.
pub fn default_set() -> Vec<Box<dyn CompressorPlugin>> {
    vec![gif(), jpeg(), png(), svg()]
}

/// Run an external tool as a stdin-to-stdout filter over the payload.
///
/// The tool's stderr is captured and reported on non-zero exit. A missing
/// binary surfaces as `ToolUnavailable` so the caller can tell a broken
/// installation apart from a broken image.
pub(crate) fn run_filter(tool: &'static str, args: &[&str], input: &[u8]) -> Result<Vec<u8>> {
    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| MinifyError::ToolUnavailable { tool, source })?;

    // Feed stdin from a separate thread; wait_with_output drains stdout and
    // stderr concurrently, so the pipes cannot deadlock.
    let writer = child.stdin.take().map(|mut stdin| {
        let payload = input.to_vec();
        std::thread::spawn(move || stdin.write_all(&payload))
    });

    let output = child.wait_with_output()?;

    if let Some(handle) = writer {
        match handle.join() {
            Ok(write_result) => {
                // A broken pipe is fine when the tool already exited with a
                // result; any other write failure is a real error.
                if let Err(e) = write_result {
                    if e.kind() != std::io::ErrorKind::BrokenPipe {
                        return Err(MinifyError::Io(e));
                    }
                }
            }
            Err(_) => {
                return Err(MinifyError::TaskAborted(format!(
                    "stdin writer for '{}' panicked",
                    tool
                )))
            }
        }
    }

    if !output.status.success() {
        return Err(MinifyError::ToolFailed {
            tool,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}
