// sitepatch-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Structural mismatch: pattern '{pattern}' not found in {file}")]
    #[diagnostic(
        code(sitepatch::domain::structure),
        help("The generated site no longer matches the expected layout. Update the pattern catalog, then restore from the backup and re-run.")
    )]
    StructuralMismatch { pattern: String, file: String },

    #[error("Invalid date stamp '{0}' (expected YYYYMMDD)")]
    #[diagnostic(code(sitepatch::domain::date_stamp))]
    InvalidDateStamp(String),

    #[error("Invalid pattern '{name}': {reason}")]
    #[diagnostic(code(sitepatch::domain::pattern))]
    InvalidPattern { name: String, reason: String },
}
