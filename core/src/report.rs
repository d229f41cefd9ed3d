//! Report emission. Serializes the end-of-run [`Report`] snapshot into a
//! fresh, timestamp-named file; a prior report is never appended to or
//! overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use subsweep_common::report::Report;
use subsweep_common::success;

pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes `report` into a new file and returns its path. Second
    /// granularity makes the name unique per run; a collision within the
    /// same second is accepted and not defended against.
    pub fn write(&self, report: &Report) -> anyhow::Result<PathBuf> {
        let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S").to_string();
        let path = self.output_dir.join(report.file_name(&timestamp));

        fs::write(&path, report.render())
            .with_context(|| format!("writing report to {}", path.display()))?;

        success!("All results saved to {}", path.display());
        Ok(path)
    }
}

/// Writer rooted at the current working directory, where reports of a
/// normal run belong.
pub fn cwd_writer() -> ReportWriter {
    ReportWriter::new(Path::new("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn temp_out_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("subsweep-report-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn writes_a_fresh_file_with_all_sections() {
        let dir = temp_out_dir("sections");
        let report = Report {
            target: "example.com".into(),
            reachable: vec!["www.example.com".into()],
            unreachable: vec!["old.example.com".into()],
            addresses: BTreeMap::from([("www.example.com".into(), "93.184.216.34".into())]),
        };

        let path = ReportWriter::new(&dir).write(&report).unwrap();
        let body = fs::read_to_string(&path).unwrap();

        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("example.com_"));
        assert!(name.ends_with("_subdomains_report.txt"));
        assert!(body.contains("Reachable Subdomains:\nwww.example.com\n"));
        assert!(body.contains("Unreachable Subdomains:\nold.example.com\n"));
        assert!(body.contains("Subdomain IPs:\nwww.example.com: 93.184.216.34\n"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn sanitizes_the_target_in_the_file_name() {
        let dir = temp_out_dir("sanitize");
        let report = Report {
            target: "a/b:c".into(),
            reachable: vec![],
            unreachable: vec![],
            addresses: BTreeMap::new(),
        };

        let path = ReportWriter::new(&dir).write(&report).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("a_b_c_"), "unexpected name: {name}");

        let _ = fs::remove_dir_all(&dir);
    }
}
