use colored::*;
use subsweep_common::config::Config;
use subsweep_core::setup::{self, SetupSummary};

use crate::terminal::print;

pub async fn install(cfg: &Config) {
    let summary = setup::install(cfg).await;
    print_summary("Install", &summary);
}

pub fn print_summary(label: &str, summary: &SetupSummary) {
    print::fat_separator();

    for step in &summary.steps {
        let mark = if step.ok {
            "ok".green()
        } else {
            "failed".red()
        };
        match &step.detail {
            Some(detail) => println!("  {} .. {mark} ({detail})", step.name),
            None => println!("  {} .. {mark}", step.name),
        }
    }

    let succeeded = summary.succeeded().to_string().bold().green();
    let failed = summary.failed().to_string().bold().red();
    println!("{label} finished: {succeeded} steps succeeded, {failed} failed");
}
