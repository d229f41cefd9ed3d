//! Bounded invocation of external processes.
//!
//! Every external tool this system talks to (discovery sources, ping,
//! nslookup, git, apt-get) goes through [`run`], so the wall-clock bound
//! and output capture behave identically everywhere.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum ExecError {
    /// The bound expired; the child is killed on drop.
    #[error("`{0}` timed out")]
    TimedOut(String),

    /// The process could not be spawned (binary missing, permissions).
    #[error("failed to launch `{0}`: {1}")]
    Launch(String, #[source] std::io::Error),
}

/// Captured result of a completed (possibly failed) process.
#[derive(Debug)]
pub struct ExecOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs `program` with `args`, capturing stdout/stderr, enforcing a hard
/// wall-clock `bound`. A non-zero exit is a normal [`ExecOutput`], not an
/// error; callers decide what an exit code means.
pub async fn run(program: &str, args: &[&str], bound: Duration) -> Result<ExecOutput, ExecError> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(bound, child)
        .await
        .map_err(|_| ExecError::TimedOut(program.to_string()))?
        .map_err(|e| ExecError::Launch(program.to_string(), e))?;

    Ok(ExecOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
