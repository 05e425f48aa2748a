pub mod catalog;
pub mod context;
pub mod document;
pub mod error;
pub mod markup;
pub mod project;
pub mod rewriter;
pub mod validation;

// Handy re-exports to keep imports short elsewhere
pub use catalog::{Matcher, Pattern, PatternCatalog, PatternRole};
pub use context::{DateStamp, TemplateContext};
pub use document::Document;
pub use project::ProjectConfig;
pub use error::DomainError;
pub use rewriter::ContentRewriter;
pub use validation::{PatternCheck, StructuralValidator, ValidationReport};
