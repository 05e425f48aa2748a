// sitepatch-core/src/domain/markup/mod.rs
//
// Minimal HTML tree used to canonicalize generated pages and to match
// tree-shape patterns. Tolerant by construction: stray end tags are dropped
// and unclosed elements are closed at end of input.

pub mod formatter;
pub mod node;
pub mod parser;
pub mod shape;

pub use formatter::canonicalize;
pub use node::{Element, Node};
pub use parser::parse;
pub use shape::ElementShape;
