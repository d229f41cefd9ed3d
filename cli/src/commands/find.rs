use std::time::{Duration, Instant};

use colored::*;
use subsweep_common::config::Config;
use subsweep_common::report::Report;
use subsweep_core::pipeline::{ReconOutcome, ReconPipeline};

use crate::terminal::{print, spinner};

pub async fn find(domain: &str, cfg: &Config) -> anyhow::Result<()> {
    let pipeline = ReconPipeline::with_defaults(cfg);

    let pb = spinner::start(format!("Sweeping {domain} for subdomains..."));
    let start_time = Instant::now();

    let outcome = pipeline.execute(domain).await;

    pb.finish_and_clear();

    let outcome: ReconOutcome = outcome?;
    render(&outcome, start_time.elapsed());
    Ok(())
}

fn render(outcome: &ReconOutcome, total_time: Duration) {
    let report = &outcome.report;

    if report.reachable.is_empty() && report.unreachable.is_empty() {
        print::header("zero subdomains detected");
        print::no_results();
    } else {
        print::header("discovered subdomains");
        print_hosts(report);
    }

    print_summary(outcome, total_time);
}

fn print_hosts(report: &Report) {
    for (idx, host) in report.reachable.iter().enumerate() {
        print::tree_head(idx, host);
        let addr = report
            .addresses
            .get(host)
            .map(String::as_str)
            .unwrap_or("?");
        print::tree_leaf("Address", addr);
    }

    for (offset, host) in report.unreachable.iter().enumerate() {
        print::tree_head(report.reachable.len() + offset, host);
        print::tree_leaf("Status", "unreachable".dimmed());
    }
}

fn print_summary(outcome: &ReconOutcome, total_time: Duration) {
    let report = &outcome.report;
    let reachable = format!("{} reachable", report.reachable.len()).bold().green();
    let unreachable = format!("{} unreachable", report.unreachable.len())
        .bold()
        .red();
    let elapsed = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print::fat_separator();
    println!("Sweep complete: {reachable}, {unreachable} in {elapsed}");
    println!("Report written to {}", outcome.report_path.display());
}
