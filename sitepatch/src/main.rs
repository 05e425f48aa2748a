// sitepatch/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug sitepatch patch ... to see every stage
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Patch {
            project_dir,
            config,
            date_stamp,
            no_open,
        } => commands::patch::execute(project_dir, config, date_stamp, no_open)?,

        Commands::Check {
            project_dir,
            config,
        } => commands::check::execute(project_dir, config)?,

        Commands::Restore {
            project_dir,
            config,
        } => commands::restore::execute(project_dir, config)?,

        Commands::Fmt { file, check } => commands::fmt::execute(file, check)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr; stdout carries the command output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
