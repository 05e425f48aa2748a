// sitepatch-core/src/infrastructure/adapters/viewer.rs

use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};

use crate::error::SitePatchError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::DocsViewer;

/// Opens the site with the platform opener and runs an optional build command.
pub struct SystemViewer {
    index: PathBuf,
    build_command: Option<Vec<String>>,
    open: bool,
}

impl SystemViewer {
    pub fn new(index: PathBuf, build_command: Option<Vec<String>>, open: bool) -> Self {
        Self {
            index,
            build_command,
            open,
        }
    }

    fn opener(&self) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(&self.index);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(&self.index);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(&self.index);
            cmd
        }
    }
}

fn run(mut cmd: Command, what: &str) -> Result<(), SitePatchError> {
    debug!(command = ?cmd, "Running {}", what);
    let status = cmd
        .status()
        .map_err(|e| InfrastructureError::Viewer(format!("{}: {}", what, e)))?;
    if !status.success() {
        return Err(InfrastructureError::Viewer(format!("{} exited with {}", what, status)).into());
    }
    Ok(())
}

impl DocsViewer for SystemViewer {
    fn build_docs(&self) -> Result<(), SitePatchError> {
        let Some((program, args)) = self.build_command.as_ref().and_then(|c| c.split_first())
        else {
            debug!("No build command configured");
            return Ok(());
        };
        let mut cmd = Command::new(program);
        cmd.args(args);
        run(cmd, "build command")
    }

    fn open_docs(&self) -> Result<(), SitePatchError> {
        if !self.open {
            info!("Opening docs disabled");
            return Ok(());
        }
        run(self.opener(), "docs opener")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_build_command_is_noop() {
        let viewer = SystemViewer::new(PathBuf::from("index.html"), None, false);
        assert!(viewer.build_docs().is_ok());
        assert!(viewer.open_docs().is_ok());
    }

    #[test]
    fn test_missing_build_program_is_viewer_error() {
        let viewer = SystemViewer::new(
            PathBuf::from("index.html"),
            Some(vec!["sitepatch-no-such-program".to_string()]),
            false,
        );
        assert!(matches!(
            viewer.build_docs(),
            Err(SitePatchError::Infrastructure(InfrastructureError::Viewer(_)))
        ));
    }
}
