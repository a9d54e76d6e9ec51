//! The pipeline stage itself: triage each record, delegate image payloads
//! to the compressor plugins, keep running totals, summarize once at the
//! end of the run.

use crate::constants::LOG_PREFIX;
use crate::error::{MinifyError, Result};
use crate::info;
use crate::optimize::optimize_bytes;
use crate::plugins::{self, CompressorPlugin};
use crate::record::{Contents, FileRecord};
use crate::utils::{format_file_size, format_percent, plural, saved_message};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

/// Adapter configuration. `verbose` enables per-file log lines and is
/// resolved once by the hosting CLI layer, never sniffed from the process
/// arguments here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub verbose: bool,
}

/// Stream-transform stage: feed it records with [`Minifier::process`], then
/// call [`Minifier::finalize`] exactly once after every in-flight record
/// has completed.
///
/// `process` may run concurrently from many tasks; the run counters are
/// atomics, so increments are never lost.
pub struct Minifier {
    plugins: Arc<Vec<Box<dyn CompressorPlugin>>>,
    options: Options,
    total_bytes: AtomicU64,
    total_saved_bytes: AtomicI64,
    total_files: AtomicU64,
}

impl Minifier {
    /// Default plugin set, default options.
    pub fn new() -> Self {
        Self::with_plugins(plugins::default_set(), Options::default())
    }

    /// Default plugin set with explicit options.
    pub fn with_options(options: Options) -> Self {
        Self::with_plugins(plugins::default_set(), options)
    }

    /// Caller-supplied plugin list with explicit options.
    pub fn with_plugins(plugins: Vec<Box<dyn CompressorPlugin>>, options: Options) -> Self {
        Self {
            plugins: Arc::new(plugins),
            options,
            total_bytes: AtomicU64::new(0),
            total_saved_bytes: AtomicI64::new(0),
            total_files: AtomicU64::new(0),
        }
    }

    /// Process one record.
    ///
    /// Empty placeholders and unsupported extensions are forwarded
    /// unchanged. Streaming payloads and compression failures surface as
    /// per-record errors; the record is not forwarded on any error path.
    pub async fn process(&self, mut record: FileRecord) -> Result<FileRecord> {
        let input = match std::mem::take(&mut record.contents) {
            Contents::Empty => return Ok(record),
            Contents::Stream => return Err(MinifyError::StreamingUnsupported(record.path)),
            Contents::Buffer(data) => data,
        };

        if !record.is_supported_image() {
            if self.options.verbose {
                info!(
                    "{}: Skipping unsupported image {}",
                    LOG_PREFIX,
                    record.relative().display()
                );
            }
            record.contents = Contents::Buffer(input);
            return Ok(record);
        }

        let original_size = input.len() as u64;

        // The only suspension point: plugins are CPU-bound or spawn
        // subprocesses, so they run on the blocking pool.
        let plugins = Arc::clone(&self.plugins);
        let outcome = tokio::task::spawn_blocking(move || optimize_bytes(&input, &plugins))
            .await
            .map_err(|e| {
                MinifyError::compression_failed(
                    record.path.clone(),
                    MinifyError::TaskAborted(e.to_string()),
                )
            })?;

        let optimized = match outcome {
            Ok(data) => data,
            Err(source) => {
                return Err(MinifyError::compression_failed(record.path.clone(), source))
            }
        };

        let optimized_size = optimized.len() as u64;
        let saved = original_size as i64 - optimized_size as i64;

        self.total_bytes.fetch_add(original_size, Ordering::Relaxed);
        self.total_saved_bytes.fetch_add(saved, Ordering::Relaxed);
        self.total_files.fetch_add(1, Ordering::Relaxed);

        if self.options.verbose {
            info!(
                "{}: ✔ {} ({})",
                LOG_PREFIX,
                record.relative().display(),
                saved_message(original_size, optimized_size)
            );
        }

        record.contents = Contents::Buffer(optimized);
        Ok(record)
    }

    /// End-of-run summary message: `Minified <N> image(s)` plus the saved
    /// total when anything went through the compression branch.
    pub fn summary(&self) -> String {
        let files = self.total_files.load(Ordering::Relaxed);
        let total_bytes = self.total_bytes.load(Ordering::Relaxed);
        let saved_bytes = self.total_saved_bytes.load(Ordering::Relaxed);
        let percent = if total_bytes > 0 {
            saved_bytes as f64 / total_bytes as f64 * 100.0
        } else {
            0.0
        };

        let mut msg = format!("Minified {} {}", files, plural("image", files));
        if files > 0 {
            msg.push_str(&format!(
                " (saved {} - {}%)",
                format_file_size(saved_bytes),
                format_percent(percent)
            ));
        }
        msg
    }

    /// Emit the summary line. Must run only after every in-flight `process`
    /// call has completed; cannot fail.
    pub fn finalize(&self) {
        info!("{}: {}", LOG_PREFIX, self.summary());
    }

    /// Number of records that went through the compression branch.
    pub fn total_files(&self) -> u64 {
        self.total_files.load(Ordering::Relaxed)
    }

    /// Sum of original sizes of compressed records.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes.load(Ordering::Relaxed)
    }

    /// Sum of `original - optimized` over compressed records. Negative
    /// contributions from grown files are accumulated as-is.
    pub fn total_saved_bytes(&self) -> i64 {
        self.total_saved_bytes.load(Ordering::Relaxed)
    }
}

impl Default for Minifier {
    fn default() -> Self {
        Self::new()
    }
}
