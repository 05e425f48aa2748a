pub mod project;

pub use crate::domain::project::{OtherParams, ProjectConfig, SiteConfig};
pub use project::{load_project_config, parse_project_config};
