//! # Source Runner
//!
//! Owns the full lifecycle of one external discovery source: wait for
//! connectivity, run the source's one-time setup, launch its process
//! under the hard wall-clock bound, and parse whatever it printed.
//!
//! Errors never escape: each failure mode is logged and folded into an
//! empty contribution, so one broken source cannot take down the run.

use std::sync::Arc;
use std::time::Duration;

use subsweep_common::error::SourceError;
use subsweep_common::utils::exec::{self, ExecError};
use subsweep_common::{error, info};
use subsweep_sources::DiscoverySource;

use crate::connectivity::ConnectivityGate;

/// What one source invocation produced: the raw candidate sequence plus
/// the error that cut it short, if any. An empty candidate list with no
/// error is a legitimate "found nothing".
pub struct SourceOutcome {
    pub source: &'static str,
    pub candidates: Vec<String>,
    pub error: Option<SourceError>,
}

impl SourceOutcome {
    fn failed(source: &'static str, error: SourceError) -> Self {
        Self {
            source,
            candidates: Vec::new(),
            error: Some(error),
        }
    }
}

pub struct SourceRunner {
    source: Box<dyn DiscoverySource>,
    gate: Arc<ConnectivityGate>,
    timeout: Duration,
}

impl SourceRunner {
    pub fn new(
        source: Box<dyn DiscoverySource>,
        gate: Arc<ConnectivityGate>,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            gate,
            timeout,
        }
    }

    pub fn name(&self) -> &'static str {
        self.source.name()
    }

    /// Runs the source against `target` to completion. Never panics and
    /// never returns `Err`; failures surface in [`SourceOutcome::error`].
    pub async fn run(&self, target: &str) -> SourceOutcome {
        let name = self.source.name();
        info!("Running {name} for domain: {target}");

        self.gate.await_up().await;

        if let Err(e) = self.source.prepare().await {
            error!("{name} setup failed: {e}");
            return SourceOutcome::failed(name, e);
        }

        let cmd = self.source.command(target);
        let args: Vec<&str> = cmd.args.iter().map(String::as_str).collect();

        let output = match exec::run(&cmd.program, &args, self.timeout).await {
            Ok(output) => output,
            Err(ExecError::TimedOut(_)) => {
                error!("{name} process timed out.");
                return SourceOutcome::failed(name, SourceError::TimedOut);
            }
            Err(e @ ExecError::Launch(..)) => {
                error!("Error running {name}: {e}");
                return SourceOutcome::failed(
                    name,
                    SourceError::ProcessFailed {
                        code: None,
                        stderr: e.to_string(),
                    },
                );
            }
        };

        if !output.success() {
            error!(
                "Error running {name}: exit {:?}: {}",
                output.code,
                output.stderr.trim()
            );
            return SourceOutcome::failed(
                name,
                SourceError::ProcessFailed {
                    code: output.code,
                    stderr: output.stderr,
                },
            );
        }

        SourceOutcome {
            source: name,
            candidates: self.source.parse(&output.stdout),
            error: None,
        }
    }
}
