// sitepatch/src/commands/patch.rs
//
// USE CASE: Patch the generated data docs.

use std::path::PathBuf;

use anyhow::Context;
use sitepatch_core::application::{RunStatus, run_pipeline};
use sitepatch_core::domain::DateStamp;
use sitepatch_core::infrastructure::adapters::SystemViewer;
use sitepatch_core::infrastructure::config::load_project_config;
use sitepatch_core::infrastructure::template::JinjaRenderer;

pub fn execute(
    project_dir: PathBuf,
    config_file: Option<PathBuf>,
    date_stamp: Option<String>,
    no_open: bool,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_project_config(&project_dir, config_file.as_deref()).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    println!("   Tables: {}", config.input_tables.join(", "));

    let date_stamp = match date_stamp {
        Some(raw) => raw.parse::<DateStamp>()?,
        None => DateStamp::today(),
    };
    println!("   Date stamp: {}", date_stamp);

    // B. Adapters
    let engine = JinjaRenderer::new();
    let viewer = SystemViewer::new(
        config.docs_index(&project_dir),
        config.site.build_command.clone(),
        config.site.open_docs && !no_open,
    );

    // C. Run the Pipeline (Application Layer)
    match run_pipeline(&engine, &viewer, &project_dir, &config, date_stamp) {
        Ok(report) => match report.status {
            RunStatus::NothingToPatch => {
                println!(
                    "⏭️  Nothing to patch: {} does not exist yet",
                    config.docs_index(&project_dir).display()
                );
            }
            RunStatus::Patched => {
                for warning in &report.warnings {
                    eprintln!("⚠️  {}", warning);
                }
                if let Some(backup) = &report.backup {
                    println!("💾 Backup: {}", backup.backup.display());
                }
                println!(
                    "\n✨ SUCCESS! Data docs patched in {:.2?}",
                    start.elapsed()
                );
            }
        },
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            eprintln!("\n💥 PATCH FAILED");
            std::process::exit(1);
        }
    }

    Ok(())
}
