pub mod find;
pub mod install;
pub mod remove;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "subsweep")]
#[command(about = "Unified subdomain discovery via subfinder, fierce and nuclei.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install the external tools and dependency packages
    #[command(alias = "i")]
    Install,
    /// Find subdomains for the given domain
    #[command(alias = "f")]
    Find { domain: String },
    /// Remove all installed tools and dependencies
    #[command(alias = "r")]
    Remove,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// No mode supplied: show usage and exit cleanly, a no-op rather than a
/// hard failure.
pub fn print_usage() {
    let _ = CommandLine::command().print_help();
}
