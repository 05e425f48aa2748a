// sitepatch/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitepatch")]
#[command(about = "Adds a Profiling Results tab to generated GX data docs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Debug-level logs (RUST_LOG is honoured otherwise)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🩹 Patches the data docs (backup -> rewrite -> render -> navigation -> open)
    Patch {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Configuration file (default: config.yaml in the project directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Report date stamp as YYYYMMDD (default: today)
        #[arg(long)]
        date_stamp: Option<String>,

        /// Do not open the site once patched
        #[arg(long)]
        no_open: bool,
    },

    /// 🔍 Checks the live page against the pattern catalog (read-only)
    Check {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// ♻️  Restores the live page from its bkp_ copy
    Restore {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// 🖌️  Rewrites an HTML file in canonical form
    Fmt {
        /// HTML file to format
        file: PathBuf,

        /// Only report whether the file is canonical
        #[arg(long)]
        check: bool,
    },
}
