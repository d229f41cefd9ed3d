mod commands;
mod terminal;

use commands::{CommandLine, Commands, find, install, remove};
use subsweep_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();

    logging::init();

    // Same fallback the rest of the recon tooling uses when HOME is unset.
    let home = std::env::var("HOME").unwrap_or_else(|_| "/root".to_string());
    let cfg = Config::from_home(&home);

    match command_line.command {
        Some(Commands::Install) => {
            print::header("installing tools and dependencies");
            install::install(&cfg).await;
            Ok(())
        }
        Some(Commands::Find { domain }) => {
            print::header("subdomain discovery");
            find::find(&domain, &cfg).await
        }
        Some(Commands::Remove) => {
            print::header("removing tools and dependencies");
            remove::remove(&cfg).await;
            Ok(())
        }
        None => {
            commands::print_usage();
            Ok(())
        }
    }
}
