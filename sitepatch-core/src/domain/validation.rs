// sitepatch-core/src/domain/validation.rs

use serde::Serialize;

use crate::domain::catalog::{Pattern, PatternRole};
use crate::domain::document::Document;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Serialize)]
pub struct PatternCheck {
    pub pattern: String,
    pub role: PatternRole,
    pub occurrences: usize,
}

impl PatternCheck {
    pub fn matched(&self) -> bool {
        self.occurrences > 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub file: String,
    pub checks: Vec<PatternCheck>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(PatternCheck::matched)
    }

    pub fn first_failure(&self) -> Option<&PatternCheck> {
        self.checks.iter().find(|c| !c.matched())
    }

    pub fn check(&self, pattern: &str) -> Option<&PatternCheck> {
        self.checks.iter().find(|c| c.pattern == pattern)
    }

    /// Fail with the first missing pattern, if any.
    pub fn ensure_passed(&self) -> Result<(), DomainError> {
        match self.first_failure() {
            Some(check) => Err(DomainError::StructuralMismatch {
                pattern: check.pattern.clone(),
                file: self.file.clone(),
            }),
            None => Ok(()),
        }
    }
}

pub struct StructuralValidator;

impl StructuralValidator {
    /// Count the occurrences of every pattern in `document`. Pure: the
    /// document is expected to be canonical already.
    pub fn validate(document: &Document, patterns: &[&Pattern]) -> ValidationReport {
        let checks = patterns
            .iter()
            .map(|pattern| PatternCheck {
                pattern: pattern.name().to_string(),
                role: pattern.role(),
                occurrences: pattern.matcher().count_matches(document.text()),
            })
            .collect();

        ValidationReport {
            file: document.display_name(),
            checks,
        }
    }
}
