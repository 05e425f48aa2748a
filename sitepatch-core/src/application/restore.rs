// sitepatch-core/src/application/restore.rs

use std::path::Path;
use tracing::info;

use crate::domain::ProjectConfig;
use crate::error::SitePatchError;
use crate::infrastructure::backup::{BackupManager, BackupRef};

/// Put the `bkp_` copy back over the live page. Only the live page is
/// touched; the template keeps whatever the last run wrote.
pub fn restore_site(
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<BackupRef, SitePatchError> {
    let live = config.docs_index(project_dir);
    let restored = BackupManager::restore(&live)?;
    info!(live = ?restored.original, "♻️  Live document restored");
    Ok(restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::infrastructure::config::parse_project_config;
    use anyhow::{Result, bail};
    use std::fs;
    use tempfile::tempdir;

    const CONFIG: &str = "input_tables: [ORDERS]\nother_params:\n  gx_data_src_name: db\n  row_count_limit: 10\n";

    #[test]
    fn test_restore_brings_back_backup() -> Result<()> {
        let dir = tempdir()?;
        let config = parse_project_config(CONFIG)?;
        let live = config.docs_index(dir.path());
        fs::create_dir_all(live.parent().unwrap_or(dir.path()))?;
        fs::write(&live, "<p>patched</p>")?;
        fs::write(BackupManager::backup_path(&live)?, "<p>original</p>")?;

        restore_site(dir.path(), &config)?;

        assert_eq!(fs::read_to_string(&live)?, "<p>original</p>");
        Ok(())
    }

    #[test]
    fn test_restore_without_backup_fails() -> Result<()> {
        let dir = tempdir()?;
        let config = parse_project_config(CONFIG)?;

        match restore_site(dir.path(), &config) {
            Ok(_) => bail!("restore without a backup must fail"),
            Err(e) => assert_eq!(e.kind(), ErrorKind::Io),
        }
        Ok(())
    }
}
