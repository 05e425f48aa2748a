// sitepatch-core/src/application/format.rs

use std::path::Path;
use tracing::{debug, info};

use crate::error::SitePatchError;
use crate::infrastructure::fs::{read_document, write_document};

/// Canonicalize one HTML file in place. Returns whether its content changed.
/// With `check_only` the file is never written.
pub fn format_file(path: &Path, check_only: bool) -> Result<bool, SitePatchError> {
    let document = read_document(path)?;
    let formatted = document.canonicalized();

    if formatted.text() == document.text() {
        debug!(path = ?path, "Already canonical");
        return Ok(false);
    }

    if !check_only {
        write_document(&formatted)?;
        info!(path = ?path, "🖌️  Formatted");
    }
    Ok(true)
}
