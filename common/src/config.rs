use std::path::PathBuf;
use std::time::Duration;

/// Well-known location of the nuclei template bundle, relative to `$HOME`.
const TEMPLATE_DIR_NAME: &str = ".nuclei-templates";

/// Runtime configuration shared by every stage of a discovery run.
///
/// Built once by the CLI and passed down explicitly; nothing in the
/// pipeline reads process-wide environment state.
#[derive(Clone, Debug)]
pub struct Config {
    /// Local checkout of the nuclei template bundle.
    pub template_dir: PathBuf,
    /// Manifest listing the external tool names to install/remove.
    pub components_manifest: PathBuf,
    /// Manifest listing the dependency packages to install/remove.
    pub requirements_manifest: PathBuf,
    /// Directory report files are written into.
    pub output_dir: PathBuf,
    /// Hard wall-clock bound for one external discovery process.
    pub source_timeout: Duration,
    /// Bound for a single liveness or resolution probe.
    pub probe_timeout: Duration,
    /// Interval between connectivity re-checks while the network is down.
    pub poll_interval: Duration,
}

impl Config {
    /// Builds the default configuration rooted at the invoking user's
    /// home directory. Manifests and reports live in the current
    /// working directory, matching where the tool is usually run from.
    pub fn from_home(home: &str) -> Self {
        Self {
            template_dir: PathBuf::from(home).join(TEMPLATE_DIR_NAME),
            components_manifest: PathBuf::from("components.txt"),
            requirements_manifest: PathBuf::from("requirements.txt"),
            output_dir: PathBuf::from("."),
            source_timeout: Duration::from_secs(600),
            probe_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_secs(10),
        }
    }
}
