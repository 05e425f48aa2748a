// sitepatch/src/commands/restore.rs
//
// USE CASE: Roll the live page back to its last backup.

use std::path::PathBuf;

use sitepatch_core::application::restore_site;
use sitepatch_core::infrastructure::config::load_project_config;

pub fn execute(project_dir: PathBuf, config_file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir, config_file.as_deref())?;
    let restored = restore_site(&project_dir, &config)?;

    println!(
        "♻️  {} restored from {}",
        restored.original.display(),
        restored.backup.display()
    );
    Ok(())
}
