// sitepatch-core/src/domain/document.rs

use std::path::{Path, PathBuf};

use crate::domain::markup;

/// Full text of one HTML file plus the path it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Same path, new content.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            text: text.into(),
        }
    }

    /// Same content, new path.
    pub fn with_path(&self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            text: self.text.clone(),
        }
    }

    pub fn canonicalized(&self) -> Self {
        self.with_text(markup::canonicalize(&self.text))
    }

    pub fn display_name(&self) -> String {
        self.path.display().to_string()
    }
}
