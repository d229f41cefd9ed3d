//! # Discovery Report Model
//!
//! The immutable end-of-run snapshot: both reachability partitions plus
//! the address mapping for the reachable side. Built once after probing
//! finishes and handed to the report writer, never mutated.

use std::collections::BTreeMap;
use std::fmt::Write;

const REACHABLE_HEADER: &str = "Reachable Subdomains:";
const UNREACHABLE_HEADER: &str = "Unreachable Subdomains:";
const ADDRESSES_HEADER: &str = "Subdomain IPs:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub target: String,
    pub reachable: Vec<String>,
    pub unreachable: Vec<String>,
    pub addresses: BTreeMap<String, String>,
}

impl Report {
    /// Renders the three labeled sections. Hostnames are written verbatim;
    /// only the surrounding file name is sanitized.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{REACHABLE_HEADER}");
        for host in &self.reachable {
            let _ = writeln!(out, "{host}");
        }

        let _ = writeln!(out, "\n{UNREACHABLE_HEADER}");
        for host in &self.unreachable {
            let _ = writeln!(out, "{host}");
        }

        let _ = writeln!(out, "\n{ADDRESSES_HEADER}");
        for (host, addr) in &self.addresses {
            let _ = writeln!(out, "{host}: {addr}");
        }

        out
    }

    /// Derives the report file name from the target and a second-granularity
    /// timestamp string. Uniqueness within the same second is not defended.
    pub fn file_name(&self, timestamp: &str) -> String {
        format!(
            "{}_{timestamp}_subdomains_report.txt",
            sanitize_component(&self.target)
        )
    }
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `_` so the
/// target domain can safely become part of a file name.
pub fn sanitize_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
