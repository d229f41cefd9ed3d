//! # Discovery Orchestrator
//!
//! Fans the target out to every source runner concurrently, joins them
//! all unconditionally, and unions the raw candidate sequences into one
//! deduplicated set. Each runner writes only into its own buffer, so no
//! locking is needed anywhere in the fan-out.

use std::collections::BTreeSet;
use std::sync::Arc;

use subsweep_common::{error, info};

use crate::runner::SourceRunner;

pub struct DiscoveryOrchestrator {
    runners: Vec<SourceRunner>,
}

impl DiscoveryOrchestrator {
    pub fn new(runners: Vec<SourceRunner>) -> Self {
        Self { runners }
    }

    /// Runs every source against `target` and unions the results.
    ///
    /// Join semantics are unconditional: a slow runner is waited out (its
    /// own wall-clock bound is the only limit), a failed one contributes
    /// nothing. All sources failing yields an empty set, not an error.
    /// The `BTreeSet` fixes the iteration order every later stage (and
    /// the final report) inherits.
    pub async fn discover(self, target: &str) -> BTreeSet<String> {
        let target = Arc::<str>::from(target);

        let handles: Vec<_> = self
            .runners
            .into_iter()
            .map(|runner| {
                let target = Arc::clone(&target);
                tokio::spawn(async move { runner.run(&target).await })
            })
            .collect();

        let mut candidates = BTreeSet::new();
        for handle in handles {
            match handle.await {
                Ok(outcome) => {
                    info!(
                        "{} finished with {} candidates",
                        outcome.source,
                        outcome.candidates.len()
                    );
                    candidates.extend(outcome.candidates);
                }
                Err(e) => error!("source task aborted: {e}"),
            }
        }
        candidates
    }
}
