//! Logging macros used across the workspace.
//!
//! Everything forwards to `tracing`; the binary decides how events are rendered.

/// Target used by [`success!`] so formatters can tell it apart from plain info.
pub const SUCCESS_TARGET: &str = "breach::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
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
