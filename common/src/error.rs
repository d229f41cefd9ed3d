use thiserror::Error;

/// Everything that can go wrong inside one external discovery source.
///
/// None of these abort a run: a failed source simply contributes zero
/// candidates and the orchestrator carries on with the others.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The external process outlived its wall-clock bound and was killed.
    #[error("process timed out")]
    TimedOut,

    /// The process exited non-zero, or could not be launched at all.
    #[error("process failed{}", exit_label(.code))]
    ProcessFailed {
        /// Exit code, when the process ran and terminated normally.
        code: Option<i32>,
        /// Captured stderr, for the diagnostic log.
        stderr: String,
    },

    /// A one-time setup step (template bundle fetch) failed; only the
    /// templated source can produce this.
    #[error("setup failed: {0}")]
    SetupFailed(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_failed_display_includes_exit_code() {
        let err = SourceError::ProcessFailed {
            code: Some(2),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "process failed with exit code 2");

        let err = SourceError::ProcessFailed {
            code: None,
            stderr: "no such file".into(),
        };
        assert_eq!(err.to_string(), "process failed");
    }
}
