// sitepatch-core/src/application/mod.rs

pub mod check;
pub mod format;
pub mod pipeline;
pub mod ports;
pub mod restore;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use sitepatch_core::application::{run_pipeline, check_site, restore_site};`

pub use check::check_site;
pub use format::format_file;
pub use pipeline::{PatchPipeline, PipelinePaths, PipelineStage, RunReport, RunStatus, run_pipeline};
pub use restore::restore_site;
