// sitepatch-core/src/infrastructure/backup.rs
//
// Single-generation recovery slot: `bkp_<name>` next to the live document.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::infrastructure::error::InfrastructureError;

pub const BACKUP_PREFIX: &str = "bkp_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupRef {
    pub original: PathBuf,
    pub backup: PathBuf,
}

pub struct BackupManager;

impl BackupManager {
    /// Sibling backup location for `document_path`.
    pub fn backup_path(document_path: &Path) -> Result<PathBuf, InfrastructureError> {
        let name = document_path.file_name().ok_or_else(|| {
            InfrastructureError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("'{}' has no file name", document_path.display()),
            ))
        })?;
        let mut backup_name = std::ffi::OsString::from(BACKUP_PREFIX);
        backup_name.push(name);
        Ok(document_path.with_file_name(backup_name))
    }

    /// Copy the current document into the backup slot, replacing any previous backup.
    #[instrument]
    pub fn backup(document_path: &Path) -> Result<BackupRef, InfrastructureError> {
        let backup = Self::backup_path(document_path)?;
        fs::copy(document_path, &backup)?;
        debug!(backup = ?backup, "Backup created");

        Ok(BackupRef {
            original: document_path.to_path_buf(),
            backup,
        })
    }

    /// Copy the backup slot back over the live document.
    #[instrument]
    pub fn restore(document_path: &Path) -> Result<BackupRef, InfrastructureError> {
        let backup = Self::backup_path(document_path)?;
        if !backup.exists() {
            return Err(InfrastructureError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no backup found at '{}'", backup.display()),
            )));
        }

        let content = fs::read(&backup)?;
        crate::infrastructure::fs::atomic_write(document_path, content)?;
        info!(from = ?backup, "Document restored from backup");

        Ok(BackupRef {
            original: document_path.to_path_buf(),
            backup,
        })
    }
}
