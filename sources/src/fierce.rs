//! Active probing via `fierce`.
//!
//! Fierce has no machine-readable output mode; discovered hosts appear
//! as `Found: <host> (<addr>)` lines, so we pattern-match those.

use std::sync::OnceLock;

use regex::Regex;

use crate::{DiscoverySource, SourceCommand};

static FOUND_LINE: OnceLock<Regex> = OnceLock::new();

fn found_line() -> &'static Regex {
    FOUND_LINE.get_or_init(|| Regex::new(r"Found: (.*?) \(").unwrap())
}

pub struct Fierce;

impl DiscoverySource for Fierce {
    fn name(&self) -> &'static str {
        "fierce"
    }

    fn command(&self, target: &str) -> SourceCommand {
        SourceCommand::new("fierce", &["--domain", target])
    }

    fn parse(&self, stdout: &str) -> Vec<String> {
        found_line()
            .captures_iter(stdout)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}
