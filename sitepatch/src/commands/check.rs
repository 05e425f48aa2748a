// sitepatch/src/commands/check.rs
//
// USE CASE: Read-only structure check of the live page.

use std::path::PathBuf;

use comfy_table::Table;
use sitepatch_core::application::check_site;
use sitepatch_core::infrastructure::config::load_project_config;

pub fn execute(project_dir: PathBuf, config_file: Option<PathBuf>) -> anyhow::Result<()> {
    println!("🔍 Checking data docs structure...");

    let config = load_project_config(&project_dir, config_file.as_deref())?;
    let report = check_site(&project_dir, &config)?;

    let mut table = Table::new();
    table.set_header(vec!["Pattern", "Role", "Occurrences", "Status"]);
    for check in &report.checks {
        table.add_row(vec![
            check.pattern.clone(),
            check.role.to_string(),
            check.occurrences.to_string(),
            if check.matched() { "✅" } else { "❌" }.to_string(),
        ]);
    }
    println!("{}", report.file);
    println!("{table}");

    if !report.passed() {
        eprintln!("\n💥 Structure drift detected: a patch run would fail.");
        std::process::exit(1);
    }
    println!("   ✅ All patterns found.");

    Ok(())
}
