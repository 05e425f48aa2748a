// sitepatch-core/src/domain/rewriter.rs

use regex::NoExpand;

use crate::domain::catalog::{Matcher, Pattern};
use crate::domain::document::Document;
use crate::domain::error::DomainError;
use crate::domain::markup;

pub struct ContentRewriter;

impl ContentRewriter {
    /// Replace every occurrence of `pattern` in `document` with `replacement`.
    ///
    /// Text patterns substitute the matched spans literally (`$` is not a
    /// capture reference) and leave every other byte untouched. Shape patterns
    /// swap each matching element for the parsed replacement fragment and
    /// return the document in canonical form. Zero matches is an error.
    pub fn rewrite(
        document: &Document,
        pattern: &Pattern,
        replacement: &str,
    ) -> Result<Document, DomainError> {
        let mismatch = || DomainError::StructuralMismatch {
            pattern: pattern.name().to_string(),
            file: document.display_name(),
        };

        let rewritten = match pattern.matcher() {
            Matcher::Text(regex) => {
                if !regex.is_match(document.text()) {
                    return Err(mismatch());
                }
                regex
                    .replace_all(document.text(), NoExpand(replacement))
                    .into_owned()
            }
            Matcher::Shape(shape) => {
                let mut nodes = markup::parse(document.text());
                let fragment = markup::parse(replacement);
                if shape.replace_in(&mut nodes, &fragment) == 0 {
                    return Err(mismatch());
                }
                markup::formatter::serialize(&nodes)
            }
        };

        Ok(document.with_text(rewritten))
    }

    /// Rewrite with the pattern's own catalog replacement.
    pub fn apply(document: &Document, pattern: &Pattern) -> Result<Document, DomainError> {
        let replacement = pattern
            .replacement()
            .ok_or_else(|| DomainError::InvalidPattern {
                name: pattern.name().to_string(),
                reason: "pattern has no replacement".to_string(),
            })?;
        Self::rewrite(document, pattern, replacement)
    }
}
