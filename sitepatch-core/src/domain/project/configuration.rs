// src/domain/project/configuration.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[validate(
        length(min = 1, message = "'input_tables' must list at least one table"),
        custom(function = "validate_table_names")
    )]
    pub input_tables: Vec<String>,

    #[validate(nested)]
    pub other_params: OtherParams,

    #[serde(default)]
    pub site: SiteConfig,
}

/// Parameters consumed by the profiling collaborators; only checked here.
#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct OtherParams {
    #[validate(length(min = 1, message = "'gx_data_src_name' must not be empty"))]
    pub gx_data_src_name: String,

    #[validate(range(min = 1, message = "'row_count_limit' must be greater than zero"))]
    pub row_count_limit: u64,
}

/// Unknown keys are a configuration error.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    #[serde(default = "default_template_name")]
    pub template_name: String,

    #[serde(default = "default_target_html")]
    pub target_html: String,

    #[serde(default = "default_open_docs")]
    pub open_docs: bool,

    /// argv of the command that rebuilds the docs site, if any.
    #[serde(default)]
    pub build_command: Option<Vec<String>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            templates_dir: default_templates_dir(),
            template_name: default_template_name(),
            target_html: default_target_html(),
            open_docs: default_open_docs(),
            build_command: None,
        }
    }
}

impl ProjectConfig {
    pub fn docs_index(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.site.docs_dir).join(INDEX_FILE)
    }

    pub fn template_path(&self, project_dir: &Path) -> PathBuf {
        project_dir
            .join(&self.site.templates_dir)
            .join(&self.site.template_name)
    }

    pub fn target_html_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.site.target_html)
    }
}

fn validate_table_names(tables: &[String]) -> Result<(), ValidationError> {
    if tables.iter().all(|t| t.trim().is_empty()) {
        let mut err = ValidationError::new("blank_tables");
        err.message = Some("'input_tables' contains only blank entries".into());
        return Err(err);
    }
    Ok(())
}

fn default_docs_dir() -> String {
    "gx/uncommitted/data_docs/local_site".to_string()
}
fn default_templates_dir() -> String {
    "templates".to_string()
}
fn default_template_name() -> String {
    "index.html.j2".to_string()
}
fn default_target_html() -> String {
    "assets/target_html.txt".to_string()
}
fn default_open_docs() -> bool {
    true
}
