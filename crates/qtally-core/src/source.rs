use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{QtallyError, Result};

/// Raw contents of a question bank source file.
///
/// Immutable once loaded; the scan works on the full text in memory.
#[derive(Debug)]
pub struct SourceText {
    pub path: PathBuf,
    content: String,
}

impl SourceText {
    /// Read the whole file into memory. The handle is released before this
    /// returns, on success and failure alike.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QtallyError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        // Non-UTF-8 content surfaces as an InvalidData IO error here.
        let content = fs::read_to_string(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
