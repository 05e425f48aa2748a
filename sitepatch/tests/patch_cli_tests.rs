use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const LIVE: &str = "gx/uncommitted/data_docs/local_site/index.html";
const BACKUP: &str = "gx/uncommitted/data_docs/local_site/bkp_index.html";
const TEMPLATE: &str = "templates/index.html.j2";

/// A throwaway copy of the fixture GX project.
struct GxProjectEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl GxProjectEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gx_project");

        let dest = tmp.path().join("gx_project");
        Self::copy_dir(&fixture, &dest)?;

        Ok(Self {
            _tmp: tmp,
            root: dest,
        })
    }

    fn copy_dir(src: &Path, dst: &Path) -> std::io::Result<()> {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.content_only = true;

        fs::create_dir_all(dst)?;
        fs_extra::dir::copy(src, dst, &options)
            .map(|_| ())
            .map_err(|e| std::io::Error::other(e.to_string()))
    }

    fn sitepatch(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sitepatch"));
        cmd.current_dir(&self.root);
        cmd.env_remove("SITEPATCH_DOCS_DIR");
        cmd.env_remove("SITEPATCH_TEMPLATES_DIR");
        cmd
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    fn read(&self, relative: &str) -> Result<String> {
        fs::read_to_string(self.path(relative)).with_context(|| format!("reading {}", relative))
    }

    /// Every file under the project with its content.
    fn snapshot(&self) -> Result<BTreeMap<PathBuf, Vec<u8>>> {
        let mut files = BTreeMap::new();
        for entry in walkdir::WalkDir::new(&self.root) {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.insert(entry.path().to_path_buf(), fs::read(entry.path())?);
            }
        }
        Ok(files)
    }
}

#[test]
fn test_patch_adds_profiling_results() -> Result<()> {
    let env = GxProjectEnv::new()?;
    let original = env.read(LIVE)?;

    env.sitepatch()
        .args(["patch", "--date-stamp", "20240115", "--no-open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS"));

    let live = env.read(LIVE)?;
    assert_eq!(live.matches(r#"class="nav-link""#).count(), 2);
    let suites = live.find(r#"id="Expectation-Suites-tab""#).context("suites tab")?;
    let profiling = live.find(r#"id="Profiling-Results-tab""#).context("profiling tab")?;
    assert!(suites < profiling);

    assert!(live.contains("20240115_ORDERS_profile.html"));
    assert!(live.contains("20240115_CUSTOMERS_profile.html"));
    assert!(live.contains(r#"id="Profiling-Results""#));
    assert!(!live.contains("{%"));

    assert_eq!(env.read(BACKUP)?, original);

    let template = env.read(TEMPLATE)?;
    assert!(template.contains("{% for table in input_tables %}"));
    assert!(template.contains("{{ report_name(current_date_str, table) }}"));
    Ok(())
}

#[test]
fn test_missing_live_page_is_a_clean_skip() -> Result<()> {
    let env = GxProjectEnv::new()?;
    fs::remove_file(env.path(LIVE))?;
    let before = env.snapshot()?;

    env.sitepatch()
        .args(["patch", "--no-open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to patch"));

    assert_eq!(env.snapshot()?, before);
    Ok(())
}

#[test]
fn test_structural_drift_fails_and_only_backs_up() -> Result<()> {
    let env = GxProjectEnv::new()?;
    let drifted = env
        .read(LIVE)?
        .replace("Stay current on everything GX with our newsletter", "Join the community");
    fs::write(env.path(LIVE), &drifted)?;

    env.sitepatch()
        .args(["patch", "--no-open"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("footer-block"));

    assert_eq!(env.read(LIVE)?, drifted);
    assert_eq!(env.read(BACKUP)?, drifted);
    assert!(!env.path(TEMPLATE).exists());
    Ok(())
}

#[test]
fn test_check_is_read_only() -> Result<()> {
    let env = GxProjectEnv::new()?;
    let before = env.snapshot()?;

    env.sitepatch()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("script-then-footer"))
        .stdout(predicate::str::contains("expectation-suites-tab"));

    assert_eq!(env.snapshot()?, before);
    Ok(())
}

#[test]
fn test_check_fails_after_patch() -> Result<()> {
    let env = GxProjectEnv::new()?;
    env.sitepatch()
        .args(["patch", "--no-open"])
        .assert()
        .success();

    // The row-click script is replaced, so a second run would not match.
    env.sitepatch().arg("check").assert().failure().code(1);
    Ok(())
}

#[test]
fn test_restore_after_patch() -> Result<()> {
    let env = GxProjectEnv::new()?;
    let original = env.read(LIVE)?;

    env.sitepatch()
        .args(["patch", "--no-open"])
        .assert()
        .success();
    assert_ne!(env.read(LIVE)?, original);

    env.sitepatch().arg("restore").assert().success();
    assert_eq!(env.read(LIVE)?, original);
    Ok(())
}

#[test]
fn test_invalid_configuration_is_rejected() -> Result<()> {
    let env = GxProjectEnv::new()?;
    fs::write(
        env.path("config.yaml"),
        "input_tables: []\nother_params:\n  gx_data_src_name: db\n  row_count_limit: 10\n",
    )?;
    let before = env.snapshot()?;

    env.sitepatch()
        .args(["patch", "--no-open"])
        .assert()
        .failure();

    assert_eq!(env.snapshot()?, before);
    Ok(())
}

#[test]
fn test_invalid_date_stamp_is_rejected() -> Result<()> {
    let env = GxProjectEnv::new()?;

    env.sitepatch()
        .args(["patch", "--no-open", "--date-stamp", "2024-01-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYYMMDD"));

    assert!(!env.path(BACKUP).exists());
    Ok(())
}

#[test]
fn test_fmt_check_then_format() -> Result<()> {
    let env = GxProjectEnv::new()?;
    let page = env.path("page.html");
    fs::write(&page, "<div><p id=\"x\" class=\"y\">hello</p></div>")?;

    env.sitepatch()
        .args(["fmt", "page.html", "--check"])
        .assert()
        .failure()
        .code(1);

    env.sitepatch().args(["fmt", "page.html"]).assert().success();
    env.sitepatch()
        .args(["fmt", "page.html", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("canonical"));
    Ok(())
}
