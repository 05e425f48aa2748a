// sitepatch-core/src/error.rs

use crate::application::pipeline::PipelineStage;
use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SitePatchError {
    // --- DOMAIN ERRORS (structure drift, invalid inputs) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, YAML, templates) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- PIPELINE CONTEXT ---
    #[error("Stage '{stage}' failed: {source}")]
    #[diagnostic(code(sitepatch::pipeline::stage))]
    Stage {
        stage: PipelineStage,
        #[source]
        source: Box<SitePatchError>,
    },
}

/// Operator-facing error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    StructuralMismatch,
    Io,
    Render,
}

impl SitePatchError {
    pub fn in_stage(stage: PipelineStage, source: SitePatchError) -> Self {
        SitePatchError::Stage {
            stage,
            source: Box::new(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SitePatchError::Domain(e) => match e {
                DomainError::StructuralMismatch { .. } => ErrorKind::StructuralMismatch,
                DomainError::InvalidDateStamp(_) => ErrorKind::Configuration,
                DomainError::InvalidPattern { .. } => ErrorKind::Configuration,
            },
            SitePatchError::Infrastructure(e) => match e {
                InfrastructureError::Io(_) | InfrastructureError::Viewer(_) => ErrorKind::Io,
                InfrastructureError::YamlError(_)
                | InfrastructureError::ConfigError(_)
                | InfrastructureError::ConfigNotFound(_) => ErrorKind::Configuration,
                InfrastructureError::TemplateError(_)
                | InfrastructureError::TemplateNotFound(_) => ErrorKind::Render,
            },
            SitePatchError::Stage { source, .. } => source.kind(),
        }
    }
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for SitePatchError {
    fn from(err: std::io::Error) -> Self {
        SitePatchError::Infrastructure(InfrastructureError::Io(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_wrapper_keeps_kind() {
        let inner = SitePatchError::Domain(DomainError::StructuralMismatch {
            pattern: "footer-block".to_string(),
            file: "index.html".to_string(),
        });
        let wrapped = SitePatchError::in_stage(PipelineStage::ValidateAndRewrite, inner);

        assert_eq!(wrapped.kind(), ErrorKind::StructuralMismatch);
        assert!(wrapped.to_string().contains("ValidateAndRewrite"));
        assert!(wrapped.to_string().contains("footer-block"));
    }

    #[test]
    fn test_io_error_maps_to_io_kind() {
        let err: SitePatchError = std::io::Error::other("disk full").into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
