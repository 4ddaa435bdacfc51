// SPDX-License-Identifier: MPL-2.0
//! Transcript model and file loading.

use crate::error::TranscriptError;
use std::path::{Path, PathBuf};

/// A loaded transcript. Immutable once loaded; the content is an arbitrary
/// UTF-8 text blob, potentially thousands of lines. Empty content is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Source file path, used as the transcript identity.
    path: PathBuf,
    title: String,
    content: String,
}

impl Transcript {
    /// Builds a transcript from in-memory parts.
    #[must_use]
    pub fn new(path: PathBuf, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Reads a transcript from a file. The title derives from the file stem.
    pub fn load(path: &Path) -> Result<Self, TranscriptError> {
        let bytes = std::fs::read(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => TranscriptError::NotFound,
            _ => TranscriptError::IoError(err.to_string()),
        })?;
        let content = String::from_utf8(bytes).map_err(|_| TranscriptError::InvalidUtf8)?;

        Ok(Self {
            path: path.to_path_buf(),
            title: title_for(path),
            content,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of content lines; zero for empty content.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Derives a display title from a file path's stem.
#[must_use]
pub fn title_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Untitled")
        .to_string()
}
