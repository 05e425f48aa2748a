// sitepatch/src/commands/fmt.rs
//
// USE CASE: Canonicalize a single HTML file.

use std::path::PathBuf;

use sitepatch_core::application::format_file;

pub fn execute(file: PathBuf, check: bool) -> anyhow::Result<()> {
    let changed = format_file(&file, check)?;

    match (changed, check) {
        (false, _) => println!("✅ {} is canonical", file.display()),
        (true, false) => println!("🖌️  {} formatted", file.display()),
        (true, true) => {
            eprintln!("❌ {} is not canonical", file.display());
            std::process::exit(1);
        }
    }
    Ok(())
}
