//! # Provisioning Steps
//!
//! Install/removal of the external tools and dependency packages the
//! discovery pipeline shells out to. Modeled as a flat sequence of
//! independent steps: each one succeeds or fails on its own, failures
//! are logged and counted, nothing rolls back, and later steps always
//! still run.

use std::path::Path;
use std::time::Duration;

use subsweep_common::config::Config;
use subsweep_common::utils::exec;
use subsweep_common::{error, info, success};
use subsweep_sources::nuclei;

const APT_BOUND: Duration = Duration::from_secs(600);
const VERSION_BOUND: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct StepOutcome {
    pub name: String,
    pub ok: bool,
    pub detail: Option<String>,
}

/// Aggregate of one best-effort provisioning run.
#[derive(Debug, Default)]
pub struct SetupSummary {
    pub steps: Vec<StepOutcome>,
}

impl SetupSummary {
    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.ok).count()
    }

    pub fn failed(&self) -> usize {
        self.steps.len() - self.succeeded()
    }

    fn record_ok(&mut self, name: impl Into<String>) {
        self.steps.push(StepOutcome {
            name: name.into(),
            ok: true,
            detail: None,
        });
    }

    fn record_failed(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        let name = name.into();
        let detail = detail.into();
        error!("{name} failed: {detail}");
        self.steps.push(StepOutcome {
            name,
            ok: false,
            detail: Some(detail),
        });
    }
}

/// Installs dependency packages and tools named by the two manifests.
pub async fn install(cfg: &Config) -> SetupSummary {
    let mut summary = SetupSummary::default();

    info!("Installing required libraries...");
    for pkg in read_manifest(&cfg.requirements_manifest, &mut summary) {
        apt_install(&pkg, &mut summary).await;
    }

    info!("Installing necessary tools...");
    for tool in read_manifest(&cfg.components_manifest, &mut summary) {
        if is_tool_installed(&tool).await {
            info!("{tool} is already installed.");
            summary.record_ok(format!("install {tool}"));
            continue;
        }
        apt_install(&tool, &mut summary).await;
    }

    summary
}

/// Removes everything [`install`] set up, plus the template bundle.
pub async fn remove(cfg: &Config) -> SetupSummary {
    let mut summary = SetupSummary::default();

    info!("Uninstalling libraries...");
    for pkg in read_manifest(&cfg.requirements_manifest, &mut summary) {
        apt_remove(&pkg, &mut summary).await;
    }

    info!("Uninstalling necessary tools...");
    for tool in read_manifest(&cfg.components_manifest, &mut summary) {
        apt_remove(&tool, &mut summary).await;
    }

    remove_template_bundle(&cfg.template_dir, &mut summary);

    summary
}

/// One name per line; blank lines and `#` comments are skipped. A
/// missing manifest is itself a failed step, and simply contributes an
/// empty name list.
fn read_manifest(path: &Path, summary: &mut SetupSummary) -> Vec<String> {
    let step = format!("read {}", path.display());
    match std::fs::read_to_string(path) {
        Ok(body) => {
            summary.record_ok(step);
            body.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect()
        }
        Err(e) => {
            summary.record_failed(step, e.to_string());
            Vec::new()
        }
    }
}

/// A tool that answers `--version` in any way counts as installed; only
/// a failed launch means it is missing.
async fn is_tool_installed(tool: &str) -> bool {
    exec::run(tool, &["--version"], VERSION_BOUND).await.is_ok()
}

async fn apt_install(name: &str, summary: &mut SetupSummary) {
    info!("Installing {name}...");
    run_apt(&["install", "-y", name], format!("install {name}"), summary).await;
}

async fn apt_remove(name: &str, summary: &mut SetupSummary) {
    info!("Removing {name}...");
    run_apt(&["remove", "-y", name], format!("remove {name}"), summary).await;
}

async fn run_apt(args: &[&str], step: String, summary: &mut SetupSummary) {
    let mut full = vec!["apt-get"];
    full.extend_from_slice(args);

    match exec::run("sudo", &full, APT_BOUND).await {
        Ok(out) if out.success() => {
            success!("{step} completed successfully.");
            summary.record_ok(step);
        }
        Ok(out) => summary.record_failed(step, format!("exit {:?}", out.code)),
        Err(e) => summary.record_failed(step, e.to_string()),
    }
}

fn remove_template_bundle(template_dir: &Path, summary: &mut SetupSummary) {
    let step = "remove nuclei-templates";
    match nuclei::remove_templates(template_dir) {
        Ok(true) => {
            success!("nuclei-templates removed successfully.");
            summary.record_ok(step);
        }
        Ok(false) => summary.record_ok(step),
        Err(e) => summary.record_failed(step, e.to_string()),
    }
}
