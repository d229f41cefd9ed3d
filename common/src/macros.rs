//! Thin wrappers over `tracing` so every crate in the workspace logs
//! through the same symbols without importing tracing directly.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

/// Positive outcome lines ("X completed successfully"). Rendered with its
/// own symbol by the CLI formatter, keyed on the event target.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "subsweep::success", $($arg)*)
    };
}
