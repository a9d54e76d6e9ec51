//! File collection and the concurrent pipeline driver used by the CLI.

use crate::adapter::Minifier;
use crate::error::{MinifyError, Result};
use crate::record::{Contents, FileRecord};
use crate::utils::create_progress_bar;
use crate::{error, warn};
use futures::stream::{self, StreamExt};
use glob::glob;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Collect the files to feed through the pipeline.
///
/// `input` may be a directory (walked, optionally recursively), a glob
/// pattern, or a single file. Every file is collected, image or not: the
/// adapter decides what to skip, and skipped files are still copied through
/// to the output directory.
pub fn collect_files(input: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let input_path = Path::new(input);

    if input_path.is_dir() {
        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();
        for entry in WalkDir::new(input_path).max_depth(max_depth) {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();
        return Ok(files);
    }

    if input.contains('*') || input.contains('?') || input.contains('[') {
        let mut files = Vec::new();
        for entry in glob(input)? {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        return Ok(files);
    }

    if input_path.is_file() {
        return Ok(vec![input_path.to_path_buf()]);
    }

    Err(MinifyError::FileNotFound(input_path.to_path_buf()))
}

/// Root directory the collected files should be made relative to when
/// mirroring them into the output directory.
fn record_base(input: &str) -> Option<PathBuf> {
    let input_path = Path::new(input);
    if input_path.is_dir() {
        Some(input_path.to_path_buf())
    } else if input_path.is_file() {
        input_path.parent().map(Path::to_path_buf)
    } else {
        // Glob pattern: everything before the first meta character.
        let prefix: String = input
            .chars()
            .take_while(|c| !matches!(c, '*' | '?' | '['))
            .collect();
        let dir = Path::new(&prefix);
        if dir.is_dir() {
            Some(dir.to_path_buf())
        } else {
            dir.parent().map(Path::to_path_buf)
        }
    }
}

/// Drive the adapter over every collected file with bounded concurrency,
/// mirror forwarded records into `output`, and emit the summary once the
/// stream is fully drained. Per-record failures are reported and counted
/// but never abort the run.
///
/// Returns the number of records that failed.
pub async fn run_batch(
    input: &str,
    output: &Path,
    minifier: Minifier,
    concurrency: usize,
    recursive: bool,
) -> Result<usize> {
    let files = collect_files(input, recursive)?;
    if files.is_empty() {
        warn!("No files found in input path: {}", input);
    }

    let base = record_base(input);
    let minifier = Arc::new(minifier);
    let pb = create_progress_bar(files.len() as u64);

    let results: Vec<Result<FileRecord>> = stream::iter(files)
        .map(|path| {
            let minifier = Arc::clone(&minifier);
            let base = base.clone();
            async move {
                let data = tokio::fs::read(&path).await?;
                let mut record = FileRecord::from_buffer(path, data);
                if let Some(base) = base {
                    record = record.with_base(base);
                }
                minifier.process(record).await
            }
        })
        .buffer_unordered(concurrency.max(1))
        .inspect(|_| pb.inc(1))
        .collect()
        .await;

    pb.finish_and_clear();

    let mut failed = 0;
    for result in results {
        match result {
            Ok(record) => write_record(output, &record).await?,
            Err(e) => {
                failed += 1;
                error!("{}", e);
            }
        }
    }

    // Every in-flight record has completed by now.
    minifier.finalize();

    Ok(failed)
}

/// Mirror one forwarded record under the output directory at its relative
/// path. Empty placeholders produce no file.
async fn write_record(output: &Path, record: &FileRecord) -> Result<()> {
    let Contents::Buffer(data) = &record.contents else {
        return Ok(());
    };

    let target = output.join(record.relative());
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&target, data).await?;
    Ok(())
}
