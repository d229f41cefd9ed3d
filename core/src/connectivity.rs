//! # Connectivity Gate
//!
//! Every external invocation is gated on the network actually being up:
//! a single bounded probe answers "up right now?", and [`ConnectivityGate`]
//! turns that into a blocking wait that polls until the network returns.
//!
//! The probe itself is a trait so tests can drive the gate with a fake
//! check and paused time instead of real sleeps and real packets.

use std::time::Duration;

use async_trait::async_trait;
use subsweep_common::utils::exec;
use subsweep_common::{info, warn};

/// Well-known host used as the reachability beacon.
const BEACON: &str = "8.8.8.8";
/// Bound for one probe; well above a sane RTT, well below the poll interval.
const PROBE_BOUND: Duration = Duration::from_secs(5);

#[async_trait]
pub trait ConnectivityCheck: Send + Sync {
    /// One bounded reachability probe. No retries, no side effects.
    async fn is_up(&self) -> bool;
}

/// Production check: `ping -c 1` against the beacon host.
///
/// A missing or broken ping binary is indistinguishable from the network
/// being down; both read as "down" and are retried on the same schedule.
pub struct PingCheck;

#[async_trait]
impl ConnectivityCheck for PingCheck {
    async fn is_up(&self) -> bool {
        match exec::run("ping", &["-c", "1", BEACON], PROBE_BOUND).await {
            Ok(out) => out.success(),
            Err(_) => false,
        }
    }
}

pub struct ConnectivityGate {
    check: Box<dyn ConnectivityCheck>,
    poll_interval: Duration,
}

impl ConnectivityGate {
    pub fn new(check: Box<dyn ConnectivityCheck>, poll_interval: Duration) -> Self {
        Self {
            check,
            poll_interval,
        }
    }

    pub async fn is_up(&self) -> bool {
        self.check.is_up().await
    }

    /// Returns once the network is reachable, probing at the configured
    /// interval for as long as it takes. Logs the lost/restored transition
    /// exactly once per outage.
    pub async fn await_up(&self) {
        if self.is_up().await {
            return;
        }

        warn!("Internet connection lost. Pausing the process...");
        loop {
            tokio::time::sleep(self.poll_interval).await;
            if self.is_up().await {
                break;
            }
        }
        info!("Internet connection restored. Resuming the process...");
    }
}
