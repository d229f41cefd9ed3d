//! Post-discovery enrichment probes.
//!
//! Both probes run strictly sequentially after the discovery join
//! barrier, one external check at a time. Sequential order is what fixes
//! the ordering of the final report, so neither stage is parallelized.

pub mod reachability;
pub mod resolution;
