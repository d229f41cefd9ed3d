//! Template-driven fingerprinting via `nuclei`.
//!
//! Nuclei needs a local template bundle before it can run; [`Nuclei::prepare`]
//! clones it on first use. The bundle path is explicit configuration, handed
//! in at construction, so nothing here reads process-wide environment state.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use subsweep_common::error::SourceError;
use subsweep_common::utils::exec;
use subsweep_common::{info, success};

use crate::{DiscoverySource, SourceCommand};

const TEMPLATE_REPO: &str = "https://github.com/projectdiscovery/nuclei-templates";
const CLONE_BOUND: Duration = Duration::from_secs(600);

static INF_LINE: OnceLock<Regex> = OnceLock::new();

// First token following an `[INF]` marker. This pattern-matches nuclei's
// informational log lines rather than a structured output mode; fragile,
// but it is the observable extraction contract downstream tooling relies
// on, so it stays byte-for-byte compatible.
fn inf_line() -> &'static Regex {
    INF_LINE.get_or_init(|| Regex::new(r"\[INF\].*?(\S+)").unwrap())
}

pub struct Nuclei {
    template_dir: PathBuf,
}

impl Nuclei {
    pub fn new(template_dir: PathBuf) -> Self {
        Self { template_dir }
    }

    async fn clone_templates(&self) -> Result<(), SourceError> {
        info!("Cloning nuclei-templates repository...");
        let dest = self.template_dir.to_string_lossy();
        let out = exec::run("git", &["clone", TEMPLATE_REPO, &dest], CLONE_BOUND)
            .await
            .map_err(|e| SourceError::SetupFailed(e.to_string()))?;

        if !out.success() {
            return Err(SourceError::SetupFailed(format!(
                "git clone exited with {:?}: {}",
                out.code,
                out.stderr.trim()
            )));
        }

        success!("nuclei-templates cloned successfully");
        Ok(())
    }
}

#[async_trait]
impl DiscoverySource for Nuclei {
    fn name(&self) -> &'static str {
        "nuclei"
    }

    fn command(&self, target: &str) -> SourceCommand {
        SourceCommand::new(
            "nuclei",
            &["-u", target, "-t", &self.template_dir.to_string_lossy()],
        )
    }

    fn parse(&self, stdout: &str) -> Vec<String> {
        inf_line()
            .captures_iter(stdout)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    /// Fetches the template bundle once. An existing directory is taken
    /// as-is; a failed clone short-circuits this source only.
    async fn prepare(&self) -> Result<(), SourceError> {
        if self.template_dir.is_dir() {
            return Ok(());
        }
        self.clone_templates().await
    }
}

/// Deletes a previously cloned template bundle, if any.
pub fn remove_templates(template_dir: &Path) -> std::io::Result<bool> {
    if !template_dir.is_dir() {
        return Ok(false);
    }
    std::fs::remove_dir_all(template_dir)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_token_after_each_inf_marker() {
        let out = "\
[INF] api.example.com resolved via template dns-detect
[INF] dangling.example.com takeover candidate
[WRN] skipped template";
        let hosts = Nuclei::new(PathBuf::from("/tmp/t")).parse(out);
        assert_eq!(hosts, vec!["api.example.com", "dangling.example.com"]);
    }

    #[test]
    fn non_inf_lines_contribute_nothing() {
        assert!(Nuclei::new(PathBuf::from("/tmp/t")).parse("[ERR] fatal\n").is_empty());
    }

    #[test]
    fn command_points_at_the_template_dir() {
        let nuclei = Nuclei::new(PathBuf::from("/home/u/.nuclei-templates"));
        let cmd = nuclei.command("example.com");
        assert_eq!(
            cmd.args,
            vec!["-u", "example.com", "-t", "/home/u/.nuclei-templates"]
        );
    }

    #[tokio::test]
    async fn prepare_is_a_noop_when_bundle_exists() {
        let dir = std::env::temp_dir().join("subsweep-nuclei-templates-test");
        std::fs::create_dir_all(&dir).unwrap();
        let nuclei = Nuclei::new(dir.clone());
        assert!(nuclei.prepare().await.is_ok());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
