#![cfg(test)]
//! Shared mock stages for the end-to-end pipeline tests.
//!
//! Sources are backed by shell one-liners so the real process-launch and
//! parsing path is exercised; the liveness and lookup probes are scripted
//! in-process, since the tests must not depend on real network state.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use subsweep_core::connectivity::{ConnectivityCheck, ConnectivityGate};
use subsweep_core::orchestrator::DiscoveryOrchestrator;
use subsweep_core::probe::reachability::LivenessCheck;
use subsweep_core::probe::resolution::{AddressLookup, LookupOutcome};
use subsweep_core::runner::SourceRunner;
use subsweep_sources::{DiscoverySource, SourceCommand};

pub struct AlwaysUp;

#[async_trait]
impl ConnectivityCheck for AlwaysUp {
    async fn is_up(&self) -> bool {
        true
    }
}

/// A discovery source that runs a shell one-liner and treats every
/// stdout line as a candidate.
pub struct ShellSource {
    pub name: &'static str,
    pub script: &'static str,
}

#[async_trait]
impl DiscoverySource for ShellSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn command(&self, _target: &str) -> SourceCommand {
        SourceCommand::new("sh", &["-c", self.script])
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

pub fn orchestrator(sources: Vec<Box<dyn DiscoverySource>>) -> DiscoveryOrchestrator {
    let gate = Arc::new(ConnectivityGate::new(
        Box::new(AlwaysUp),
        Duration::from_secs(10),
    ));
    let runners = sources
        .into_iter()
        .map(|s| SourceRunner::new(s, Arc::clone(&gate), Duration::from_secs(30)))
        .collect();
    DiscoveryOrchestrator::new(runners)
}

/// Liveness scripted by hostname list.
pub struct ScriptedLiveness {
    pub alive: Vec<&'static str>,
}

#[async_trait]
impl LivenessCheck for ScriptedLiveness {
    async fn is_alive(&self, host: &str) -> bool {
        self.alive.contains(&host)
    }
}

/// Lookup scripted by (hostname, outcome) pairs; anything unlisted fails.
pub struct ScriptedLookup {
    pub answers: Vec<(&'static str, &'static str)>,
}

#[async_trait]
impl AddressLookup for ScriptedLookup {
    async fn lookup(&self, host: &str) -> LookupOutcome {
        match self.answers.iter().find(|(name, _)| *name == host) {
            Some((_, addr)) => LookupOutcome::Address(addr.to_string()),
            None => LookupOutcome::Failed,
        }
    }
}
