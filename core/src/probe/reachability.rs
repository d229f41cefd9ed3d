//! # Reachability Probe
//!
//! Partitions the deduplicated candidate set into reachable and
//! unreachable with one bounded liveness check per host. A check that
//! cannot be completed at all reads as unreachable; there is no retry
//! and no distinct error surface.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use subsweep_common::info;
use subsweep_common::utils::exec;

#[async_trait]
pub trait LivenessCheck: Send + Sync {
    /// One bounded liveness check. Tool errors and timeouts fold into
    /// `false`.
    async fn is_alive(&self, host: &str) -> bool;
}

/// Production check: a single `ping -c 1 <host>`.
pub struct PingLiveness {
    bound: Duration,
}

impl PingLiveness {
    pub fn new(bound: Duration) -> Self {
        Self { bound }
    }
}

#[async_trait]
impl LivenessCheck for PingLiveness {
    async fn is_alive(&self, host: &str) -> bool {
        match exec::run("ping", &["-c", "1", host], self.bound).await {
            Ok(out) => out.success(),
            Err(_) => false,
        }
    }
}

pub struct ReachabilityProbe {
    check: Box<dyn LivenessCheck>,
}

impl ReachabilityProbe {
    pub fn new(check: Box<dyn LivenessCheck>) -> Self {
        Self { check }
    }

    /// Splits `candidates` into (reachable, unreachable), preserving the
    /// set's iteration order in both outputs. Every candidate lands in
    /// exactly one of the two.
    pub async fn partition(&self, candidates: &BTreeSet<String>) -> (Vec<String>, Vec<String>) {
        let mut reachable = Vec::new();
        let mut unreachable = Vec::new();

        for host in candidates {
            info!("Pinging {host}...");
            if self.check.is_alive(host).await {
                reachable.push(host.clone());
            } else {
                unreachable.push(host.clone());
            }
        }

        (reachable, unreachable)
    }
}
