// sitepatch-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::domain::project::configuration::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["config.yaml", "config.yml"];

#[instrument(skip(project_dir))]
pub fn load_project_config(
    project_dir: &Path,
    config_file: Option<&Path>,
) -> Result<ProjectConfig, InfrastructureError> {
    // 1. Locate the file
    let config_path = match config_file {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => project_dir.join(path),
        None => find_main_config(project_dir)?,
    };
    if !config_path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            config_path.display().to_string(),
        ));
    }
    info!(path = ?config_path, "Loading project configuration");

    // 2. Parse + validate
    let content = fs::read_to_string(&config_path)?;
    let mut config = parse_project_config(&content)?;

    // 3. Environment layering
    // Allows: SITEPATCH_DOCS_DIR=/tmp/site sitepatch patch
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    debug!(tables = ?config.input_tables, params = ?config.other_params, "Configuration loaded");
    Ok(config)
}

/// Parse and validate a configuration document.
pub fn parse_project_config(content: &str) -> Result<ProjectConfig, InfrastructureError> {
    let config: ProjectConfig = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    for filename in CONFIG_CANDIDATES {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "{} (checked: {:?})",
        root.display(),
        CONFIG_CANDIDATES
    )))
}

fn apply_env_overrides<F>(config: &mut ProjectConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("SITEPATCH_DOCS_DIR") {
        info!(old = ?config.site.docs_dir, new = ?val, "Overriding docs dir via ENV");
        config.site.docs_dir = val;
    }
    if let Some(val) = lookup("SITEPATCH_TEMPLATES_DIR") {
        info!(old = ?config.site.templates_dir, new = ?val, "Overriding templates dir via ENV");
        config.site.templates_dir = val;
    }
}
