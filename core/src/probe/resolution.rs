//! # Resolution Probe
//!
//! Maps every reachable candidate to a resolved address, or to one of
//! two failure sentinels. Total by construction: each input host gets
//! exactly one entry and nothing here can raise.

use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use subsweep_common::info;
use subsweep_common::utils::exec;

/// Query succeeded, output carried no parsable address.
pub const NO_ADDRESS: &str = "address not found";
/// Query exited non-zero or could not be launched.
pub const LOOKUP_FAILED: &str = "lookup failed";

/// What one resolution query came back with.
pub enum LookupOutcome {
    Address(String),
    NoAddress,
    Failed,
}

#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn lookup(&self, host: &str) -> LookupOutcome;
}

static ADDRESS_LINE: OnceLock<Regex> = OnceLock::new();

fn address_line() -> &'static Regex {
    ADDRESS_LINE.get_or_init(|| Regex::new(r"Address: (\S+)").unwrap())
}

/// Production lookup: one `nslookup <host>` per candidate.
pub struct NslookupResolver {
    bound: Duration,
}

impl NslookupResolver {
    pub fn new(bound: Duration) -> Self {
        Self { bound }
    }

    /// First answer address in the output. nslookup prints the resolver's
    /// own socket first as `Address: 127.0.0.53#53`; the `#port` marker
    /// distinguishes it from answer records, which carry a bare address.
    fn parse_address(stdout: &str) -> Option<String> {
        address_line()
            .captures_iter(stdout)
            .map(|caps| caps[1].to_string())
            .find(|addr| !addr.contains('#'))
    }
}

#[async_trait]
impl AddressLookup for NslookupResolver {
    async fn lookup(&self, host: &str) -> LookupOutcome {
        let out = match exec::run("nslookup", &[host], self.bound).await {
            Ok(out) => out,
            Err(_) => return LookupOutcome::Failed,
        };
        if !out.success() {
            return LookupOutcome::Failed;
        }
        match Self::parse_address(&out.stdout) {
            Some(addr) => LookupOutcome::Address(addr),
            None => LookupOutcome::NoAddress,
        }
    }
}

pub struct ResolutionProbe {
    lookup: Box<dyn AddressLookup>,
}

impl ResolutionProbe {
    pub fn new(lookup: Box<dyn AddressLookup>) -> Self {
        Self { lookup }
    }

    /// Resolves every reachable candidate, sequentially, in input order.
    /// The returned map's key set equals the input set exactly.
    pub async fn resolve(&self, reachable: &[String]) -> BTreeMap<String, String> {
        let mut addresses = BTreeMap::new();

        for host in reachable {
            info!("Running nslookup for {host}...");
            let value = match self.lookup.lookup(host).await {
                LookupOutcome::Address(addr) => addr,
                LookupOutcome::NoAddress => NO_ADDRESS.to_string(),
                LookupOutcome::Failed => LOOKUP_FAILED.to_string(),
            };
            addresses.insert(host.clone(), value);
        }

        addresses
    }
}
