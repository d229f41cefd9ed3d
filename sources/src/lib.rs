//! External subdomain discovery sources.
//!
//! Each source is a black-box command-line tool described by a
//! [`DiscoverySource`]: which program to launch for a target, and how to
//! extract candidate hostnames from whatever it prints. The actual
//! launching, timeout and error capture live in the runner on top of
//! this trait, so a source stays a pure description plus a parser.

use async_trait::async_trait;
use subsweep_common::config::Config;
use subsweep_common::error::SourceError;

pub mod fierce;
pub mod nuclei;
pub mod subfinder;

/// The command line a source wants executed for one target domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl SourceCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
pub trait DiscoverySource: Send + Sync {
    fn name(&self) -> &'static str;

    /// The invocation for `target`. Purely descriptive; never launches
    /// anything itself.
    fn command(&self, target: &str) -> SourceCommand;

    /// Extracts candidate hostnames from captured stdout. Zero matches
    /// is a valid empty result, not an error.
    fn parse(&self, stdout: &str) -> Vec<String>;

    /// One-time setup before the first invocation. The default is a
    /// no-op; the templated source fetches its template bundle here.
    async fn prepare(&self) -> Result<(), SourceError> {
        Ok(())
    }
}

/// The three production sources, in the order they are spawned.
pub fn default_sources(cfg: &Config) -> Vec<Box<dyn DiscoverySource>> {
    vec![
        Box::new(subfinder::Subfinder),
        Box::new(fierce::Fierce),
        Box::new(nuclei::Nuclei::new(cfg.template_dir.clone())),
    ]
}
