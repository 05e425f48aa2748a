// sitepatch-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sitepatch::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(sitepatch::infra::yaml),
        help("Check your YAML syntax (indentation, types) and that 'input_tables' and 'other_params' are present.")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(sitepatch::infra::config))]
    ConfigError(String),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(sitepatch::infra::config_missing))]
    ConfigNotFound(String),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(sitepatch::infra::template),
        help("Check the Jinja syntax ({{ ... }}) in the index template and the target HTML asset.")
    )]
    TemplateError(#[from] minijinja::Error),

    #[error("Template not found at '{0}'")]
    #[diagnostic(code(sitepatch::infra::template_missing))]
    TemplateNotFound(String),

    // --- VIEWER ---
    #[error("Docs viewer failed: {0}")]
    #[diagnostic(code(sitepatch::infra::viewer))]
    Viewer(String),
}

impl From<validator::ValidationErrors> for InfrastructureError {
    fn from(err: validator::ValidationErrors) -> Self {
        InfrastructureError::ConfigError(err.to_string())
    }
}
