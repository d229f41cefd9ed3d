//! # Discovery Pipeline
//!
//! Wires the stages end to end: gated concurrent source fan-out, union,
//! sequential reachability partition, sequential resolution, report
//! emission. One call runs one job to completion; nothing persists
//! between runs.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::ensure;
use subsweep_common::config::Config;
use subsweep_common::info;
use subsweep_common::report::Report;
use subsweep_sources::default_sources;

use crate::connectivity::{ConnectivityGate, PingCheck};
use crate::orchestrator::DiscoveryOrchestrator;
use crate::probe::reachability::{PingLiveness, ReachabilityProbe};
use crate::probe::resolution::{NslookupResolver, ResolutionProbe};
use crate::report::ReportWriter;
use crate::runner::SourceRunner;

pub struct ReconOutcome {
    pub report: Report,
    pub report_path: PathBuf,
}

pub struct ReconPipeline {
    orchestrator: DiscoveryOrchestrator,
    reachability: ReachabilityProbe,
    resolution: ResolutionProbe,
    writer: ReportWriter,
}

impl ReconPipeline {
    /// Explicit wiring, used by tests to slot in mock stages.
    pub fn new(
        orchestrator: DiscoveryOrchestrator,
        reachability: ReachabilityProbe,
        resolution: ResolutionProbe,
        writer: ReportWriter,
    ) -> Self {
        Self {
            orchestrator,
            reachability,
            resolution,
            writer,
        }
    }

    /// Production wiring: the three real sources behind one shared
    /// connectivity gate, ping/nslookup probes, reports in `output_dir`.
    pub fn with_defaults(cfg: &Config) -> Self {
        let gate = Arc::new(ConnectivityGate::new(Box::new(PingCheck), cfg.poll_interval));
        let runners = default_sources(cfg)
            .into_iter()
            .map(|source| SourceRunner::new(source, Arc::clone(&gate), cfg.source_timeout))
            .collect();

        Self {
            orchestrator: DiscoveryOrchestrator::new(runners),
            reachability: ReachabilityProbe::new(Box::new(PingLiveness::new(cfg.probe_timeout))),
            resolution: ResolutionProbe::new(Box::new(NslookupResolver::new(cfg.probe_timeout))),
            writer: ReportWriter::new(cfg.output_dir.clone()),
        }
    }

    /// Runs the whole job for `target`. Degrades to empty partitions and
    /// an empty mapping when every source fails; always emits a report.
    /// The only hard error left is failing to write that report.
    pub async fn execute(self, target: &str) -> anyhow::Result<ReconOutcome> {
        ensure!(!target.trim().is_empty(), "target domain must not be empty");

        let candidates = self.orchestrator.discover(target).await;
        info!("Subdomain enumeration completed. Pinging subdomains...");

        let (reachable, unreachable) = self.reachability.partition(&candidates).await;

        info!("Running nslookup on reachable subdomains...");
        let addresses = self.resolution.resolve(&reachable).await;

        let report = Report {
            target: target.to_string(),
            reachable,
            unreachable,
            addresses,
        };
        let report_path = self.writer.write(&report)?;

        Ok(ReconOutcome {
            report,
            report_path,
        })
    }
}
