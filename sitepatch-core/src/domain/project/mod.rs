pub mod configuration;

pub use configuration::{OtherParams, ProjectConfig, SiteConfig};
