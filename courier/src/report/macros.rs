//! log macro's for report logging

/// Writes a debug! message to the app::report logger
#[macro_export]
macro_rules! report_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::report", $($arg)+)
    };
}

/// Writes an info! message to the app::report logger
#[macro_export]
macro_rules! report_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::report", $($arg)+)
    };
}

/// Writes an warn! message to the app::report logger
#[macro_export]
macro_rules! report_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::report", $($arg)+)
    };
}

/// Writes an error! message to the app::report logger
#[macro_export]
macro_rules! report_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::report", $($arg)+)
    };
}
