//! Passive enumeration via `subfinder`.
//!
//! In silent mode subfinder prints exactly one hostname per line, so
//! parsing is a plain line split.

use crate::{DiscoverySource, SourceCommand};

pub struct Subfinder;

impl DiscoverySource for Subfinder {
    fn name(&self) -> &'static str {
        "subfinder"
    }

    fn command(&self, target: &str) -> SourceCommand {
        SourceCommand::new("subfinder", &["-d", target, "-silent"])
    }

    fn parse(&self, stdout: &str) -> Vec<String> {
        stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}
