// sitepatch-core/src/infrastructure/fs.rs
//
// Every page and template write goes through `atomic_write`: a crash mid-run
// leaves either the previous file or the new one, never a torn page.

use crate::domain::Document;
use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Replace `path` with `content` through a sibling temp file and a rename.
pub fn atomic_write(path: &Path, content: impl AsRef<[u8]>) -> Result<(), InfrastructureError> {
    // The temp file must live on the same filesystem for the rename to be atomic.
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_ref())?;
    staged.flush()?;
    staged.persist(path).map_err(|e| e.error)?;

    debug!(path = ?path, "File written");
    Ok(())
}

pub fn read_document(path: &Path) -> Result<Document, InfrastructureError> {
    let text = std::fs::read_to_string(path)?;
    Ok(Document::new(path, text))
}

/// Persist `document` at its own path, creating parent directories.
pub fn write_document(document: &Document) -> Result<(), InfrastructureError> {
    if let Some(parent) = document.path().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    atomic_write(document.path(), document.text())
}
