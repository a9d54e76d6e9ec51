use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use std::path::{Path, PathBuf};

/// Payload of a [`FileRecord`].
///
/// Mirrors the three content states a pipeline unit can be in: an empty
/// placeholder, a fully buffered payload, or a continuous byte stream
/// (which the adapter rejects per record).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Contents {
    #[default]
    Empty,
    Buffer(Vec<u8>),
    Stream,
}

impl Contents {
    pub fn len(&self) -> usize {
        match self {
            Contents::Buffer(data) => data.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One unit of pipeline data: a file path plus its content.
///
/// Records are forwarded one-for-one; the adapter mutates `contents` in
/// place for optimized images and leaves everything else untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Root the record was collected under, used for relative display paths.
    pub base: Option<PathBuf>,
    pub contents: Contents,
}

impl FileRecord {
    pub fn from_buffer(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            base: None,
            contents: Contents::Buffer(data),
        }
    }

    /// An empty placeholder record, forwarded unchanged by the adapter.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base: None,
            contents: Contents::Empty,
        }
    }

    /// A record backed by a continuous byte stream. The adapter fails these
    /// with `StreamingUnsupported`.
    pub fn streaming(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base: None,
            contents: Contents::Stream,
        }
    }

    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Path relative to `base` when set, for human-readable log lines.
    pub fn relative(&self) -> &Path {
        match &self.base {
            Some(base) => self.path.strip_prefix(base).unwrap_or(&self.path),
            None => &self.path,
        }
    }

    pub fn extension_lowercase(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
    }

    /// Whether the record's extension belongs to a supported image family.
    pub fn is_supported_image(&self) -> bool {
        self.extension_lowercase()
            .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }
}
