// sitepatch-core/src/application/check.rs

use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::application::pipeline::PipelinePaths;
use crate::domain::catalog::PatternCatalog;
use crate::domain::{ProjectConfig, StructuralValidator, ValidationReport};
use crate::error::SitePatchError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::read_document;

/// Read-only drift check: counts every catalog pattern in the canonical form
/// of the live page. Nothing is written, not even the canonical form.
#[instrument(skip(config))]
pub fn check_site(
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<ValidationReport, SitePatchError> {
    let paths = PipelinePaths::from_config(config, project_dir);

    if !paths.live.exists() {
        return Err(InfrastructureError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("live document not found at '{}'", paths.live.display()),
        ))
        .into());
    }

    let content_block = match fs::read_to_string(&paths.target_html) {
        Ok(block) => block,
        Err(e) => {
            warn!(
                path = ?paths.target_html,
                error = %e,
                "Target HTML asset unreadable, a patch run would fail"
            );
            String::new()
        }
    };
    let catalog = PatternCatalog::new(content_block)?;

    let live = read_document(&paths.live)?.canonicalized();
    let patterns: Vec<_> = catalog.iter().collect();
    let report = StructuralValidator::validate(&live, &patterns);

    info!(passed = report.passed(), file = %report.file, "🔍 Structure check done");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{EXPECTATION_SUITES_TAB, FOOTER_BLOCK};
    use crate::domain::validation::fixtures::{ROW_CLICK_JS, gx_page, page};
    use crate::infrastructure::config::parse_project_config;
    use anyhow::Result;
    use tempfile::tempdir;

    const CONFIG: &str = "input_tables: [ORDERS]\nother_params:\n  gx_data_src_name: db\n  row_count_limit: 10\n";

    fn write_live(dir: &Path, config: &ProjectConfig, html: &str) -> Result<()> {
        let live = config.docs_index(dir);
        fs::create_dir_all(live.parent().unwrap_or(dir))?;
        fs::write(live, html)?;
        Ok(())
    }

    #[test]
    fn test_check_reports_all_patterns_without_writing() -> Result<()> {
        let dir = tempdir()?;
        let config = parse_project_config(CONFIG)?;
        let html = gx_page();
        write_live(dir.path(), &config, &html)?;

        let report = check_site(dir.path(), &config)?;

        assert!(report.passed(), "{:?}", report);
        assert_eq!(report.checks.len(), 4);
        assert!(report.check(EXPECTATION_SUITES_TAB).is_some());
        assert_eq!(fs::read_to_string(config.docs_index(dir.path()))?, html);
        assert!(!config.template_path(dir.path()).exists());
        Ok(())
    }

    #[test]
    fn test_check_flags_drift() -> Result<()> {
        let dir = tempdir()?;
        let config = parse_project_config(CONFIG)?;
        write_live(dir.path(), &config, &page(ROW_CLICK_JS, "Another footer"))?;

        let report = check_site(dir.path(), &config)?;

        assert!(!report.passed());
        assert_eq!(
            report.first_failure().map(|c| c.pattern.as_str()),
            Some(FOOTER_BLOCK)
        );
        Ok(())
    }

    #[test]
    fn test_check_missing_page_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let config = parse_project_config(CONFIG)?;

        assert!(check_site(dir.path(), &config).is_err());
        Ok(())
    }
}
