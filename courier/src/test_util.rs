//! Test utilities. Provides log macros for unit tests.

/// Writes a debug! message to the test::ut logger
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "test::ut", $($arg)+)
    };
}

/// Writes an info! message to the test::ut logger
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "test::ut", $($arg)+)
    };
}

/// Writes an warn! message to the test::ut logger
#[allow(unused_macros)]
macro_rules! ut_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "test::ut", $($arg)+)
    };
}

/// Writes an error! message to the test::ut logger
#[allow(unused_macros)]
macro_rules! ut_error {
    ($($arg:tt)+) => {
        log::error!(target: "test::ut", $($arg)+)
    };
}
