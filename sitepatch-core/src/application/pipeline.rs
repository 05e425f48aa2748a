// sitepatch-core/src/application/pipeline.rs

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, info_span, warn};

use crate::application::ports::TemplateEngine;
use crate::domain::catalog::{PatternCatalog, SCRIPT_THEN_FOOTER};
use crate::domain::{
    ContentRewriter, DateStamp, Document, ProjectConfig, StructuralValidator, TemplateContext,
    ValidationReport,
};
use crate::error::SitePatchError;
use crate::infrastructure::backup::{BackupManager, BackupRef};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{read_document, write_document};
use crate::ports::DocsViewer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineStage {
    CheckExists,
    Backup,
    ValidateAndRewrite,
    RenderTemplate,
    PatchNavigation,
    Handoff,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckExists => "CheckExists",
            Self::Backup => "Backup",
            Self::ValidateAndRewrite => "ValidateAndRewrite",
            Self::RenderTemplate => "RenderTemplate",
            Self::PatchNavigation => "PatchNavigation",
            Self::Handoff => "Handoff",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Files touched by one run.
#[derive(Debug, Clone)]
pub struct PipelinePaths {
    /// Generated `index.html` of the docs site.
    pub live: PathBuf,
    /// Jinja source kept in sync with the live page (`index.html.j2`).
    pub template: PathBuf,
    /// Companion asset holding the injected content block.
    pub target_html: PathBuf,
}

impl PipelinePaths {
    pub fn from_config(config: &ProjectConfig, project_dir: &Path) -> Self {
        Self {
            live: config.docs_index(project_dir),
            template: config.template_path(project_dir),
            target_html: config.target_html_path(project_dir),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every stage completed.
    Patched,
    /// No live document yet: nothing was read, written or backed up.
    NothingToPatch,
}

#[derive(Debug)]
pub struct RunReport {
    pub status: RunStatus,
    pub completed: Vec<PipelineStage>,
    pub backup: Option<BackupRef>,
    pub validation: Option<ValidationReport>,
    /// Non-fatal problems (failed backup, viewer errors).
    pub warnings: Vec<String>,
}

impl RunReport {
    fn new() -> Self {
        Self {
            status: RunStatus::NothingToPatch,
            completed: Vec::new(),
            backup: None,
            validation: None,
            warnings: Vec::new(),
        }
    }
}

pub struct PatchPipeline<'a, T: TemplateEngine, V: DocsViewer> {
    engine: &'a T,
    viewer: &'a V,
    paths: PipelinePaths,
    context: TemplateContext,
}

impl<'a, T: TemplateEngine, V: DocsViewer> PatchPipeline<'a, T, V> {
    pub fn new(engine: &'a T, viewer: &'a V, paths: PipelinePaths, context: TemplateContext) -> Self {
        Self {
            engine,
            viewer,
            paths,
            context,
        }
    }

    /// CheckExists -> Backup -> ValidateAndRewrite -> RenderTemplate -> PatchNavigation -> Handoff.
    /// Fails fast: the first failing stage ends the run.
    pub fn run(&self) -> Result<RunReport, SitePatchError> {
        let mut report = RunReport::new();
        info!(
            live = ?self.paths.live,
            date_stamp = %self.context.current_date_str,
            tables = self.context.input_tables.len(),
            "🚀 Starting patch pipeline"
        );

        // 1. CheckExists
        if !self.paths.live.exists() {
            warn!(path = ?self.paths.live, "Live document not found, nothing to patch");
            return Ok(report);
        }
        report.completed.push(PipelineStage::CheckExists);

        // 2. Backup (best effort)
        match self.stage(PipelineStage::Backup, || {
            BackupManager::backup(&self.paths.live).map_err(SitePatchError::Infrastructure)
        }) {
            Ok(backup) => {
                info!(backup = ?backup.backup, "💾 Backup created");
                report.backup = Some(backup);
            }
            Err(e) => {
                warn!(error = %e, "Backup failed, continuing without a recovery copy");
                report.warnings.push(e.to_string());
            }
        }
        report.completed.push(PipelineStage::Backup);

        // 3. ValidateAndRewrite
        let (catalog, validation) = self.stage(PipelineStage::ValidateAndRewrite, || {
            let catalog = self.load_catalog()?;
            let validation = self.validate_and_rewrite(&catalog)?;
            Ok((catalog, validation))
        })?;
        report.validation = Some(validation);
        report.completed.push(PipelineStage::ValidateAndRewrite);

        // 4. RenderTemplate
        self.stage(PipelineStage::RenderTemplate, || self.render_template())?;
        report.completed.push(PipelineStage::RenderTemplate);

        // 5. PatchNavigation
        self.stage(PipelineStage::PatchNavigation, || {
            self.patch_navigation(&catalog)
        })?;
        report.completed.push(PipelineStage::PatchNavigation);

        // 6. Handoff (failures never unwind the patch)
        self.handoff(&mut report);
        report.completed.push(PipelineStage::Handoff);

        report.status = RunStatus::Patched;
        info!("✨ Patch pipeline finished");
        Ok(report)
    }

    fn stage<R>(
        &self,
        stage: PipelineStage,
        f: impl FnOnce() -> Result<R, SitePatchError>,
    ) -> Result<R, SitePatchError> {
        let span = info_span!("stage", name = %stage);
        let _guard = span.enter();
        debug!("Entering stage");
        f().map_err(|e| SitePatchError::in_stage(stage, e))
    }

    fn load_catalog(&self) -> Result<PatternCatalog, SitePatchError> {
        let content_block = std::fs::read_to_string(&self.paths.target_html).map_err(|e| {
            error!(path = ?self.paths.target_html, "Cannot read the target HTML asset");
            InfrastructureError::Io(e)
        })?;
        Ok(PatternCatalog::new(content_block)?)
    }

    fn validate_and_rewrite(
        &self,
        catalog: &PatternCatalog,
    ) -> Result<ValidationReport, SitePatchError> {
        // Canonical form in memory only: nothing is written unless validation passes.
        let live = read_document(&self.paths.live)?.canonicalized();

        let validation = StructuralValidator::validate(&live, &catalog.rewrite_checks());
        log_validation(&validation);
        validation.ensure_passed()?;

        if validation
            .check(SCRIPT_THEN_FOOTER)
            .is_some_and(|c| c.occurrences > 1)
        {
            warn!(
                file = %validation.file,
                "Combined script/footer pattern found more than once, every occurrence will be replaced"
            );
        }

        let patched =
            ContentRewriter::apply(&live, catalog.script_then_footer())?.canonicalized();

        write_document(&patched)?;
        write_document(&patched.with_path(&self.paths.template))?;
        info!(
            live = ?self.paths.live,
            template = ?self.paths.template,
            "🧩 Content block injected"
        );

        Ok(validation)
    }

    fn render_template(&self) -> Result<(), SitePatchError> {
        if !self.paths.template.exists() {
            return Err(InfrastructureError::TemplateNotFound(
                self.paths.template.display().to_string(),
            )
            .into());
        }
        let template = read_document(&self.paths.template)?;
        let name = self
            .paths
            .template
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let rendered = self
            .engine
            .render(&name, template.text(), &self.context.to_value())?;

        let live = Document::new(&self.paths.live, rendered).canonicalized();
        write_document(&live)?;
        info!(template = %name, "📝 Index rendered from template");
        Ok(())
    }

    fn patch_navigation(&self, catalog: &PatternCatalog) -> Result<(), SitePatchError> {
        let live = read_document(&self.paths.live)?.canonicalized();
        let tab = catalog.expectation_suites_tab();

        let validation = StructuralValidator::validate(&live, &[tab]);
        log_validation(&validation);
        validation.ensure_passed()?;

        let patched = ContentRewriter::apply(&live, tab)?;
        write_document(&patched)?;
        info!("🧭 Profiling Results tab added");
        Ok(())
    }

    fn handoff(&self, report: &mut RunReport) {
        let _guard = info_span!("stage", name = %PipelineStage::Handoff).entered();

        if let Err(e) = self.viewer.build_docs() {
            warn!(error = %e, "Docs build failed");
            report.warnings.push(e.to_string());
        }
        if let Err(e) = self.viewer.open_docs() {
            warn!(error = %e, "Opening docs failed");
            report.warnings.push(e.to_string());
        }
    }
}

fn log_validation(report: &ValidationReport) {
    for check in &report.checks {
        if check.matched() {
            debug!(
                pattern = %check.pattern,
                occurrences = check.occurrences,
                "✅ Pattern found"
            );
        } else {
            error!(pattern = %check.pattern, file = %report.file, "❌ Pattern not found");
        }
    }
}

/// Wire a pipeline from configuration and run it.
pub fn run_pipeline<T: TemplateEngine, V: DocsViewer>(
    engine: &T,
    viewer: &V,
    project_dir: &Path,
    config: &ProjectConfig,
    date_stamp: DateStamp,
) -> Result<RunReport, SitePatchError> {
    let paths = PipelinePaths::from_config(config, project_dir);
    let context = TemplateContext::new(config.input_tables.clone(), date_stamp);
    PatchPipeline::new(engine, viewer, paths, context).run()
}
