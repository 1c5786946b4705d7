//! log macro's for routing logging

/// Writes a debug! message to the app::router logger
#[macro_export]
macro_rules! router_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::router", $($arg)+)
    };
}

/// Writes an info! message to the app::router logger
#[macro_export]
macro_rules! router_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::router", $($arg)+)
    };
}

/// Writes an warn! message to the app::router logger
#[macro_export]
macro_rules! router_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::router", $($arg)+)
    };
}

/// Writes an error! message to the app::router logger
#[macro_export]
macro_rules! router_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::router", $($arg)+)
    };
}
