//! Colour-tagged, timestamped console output used throughout the crate.
//!
//! All macros format their arguments like `println!` and prefix them with the
//! level tag and the current UTC wall-clock time. `event!` is silent unless the
//! `LOG_CONSOLE_EVENTS` environment variable is set and is meant for fine-grained
//! state transitions (session phases, superseded responses, ...).

/// Environment variable enabling the `event!` output.
pub const EVENT_LOG_VAR: &str = "LOG_CONSOLE_EVENTS";

/// Writes a single tagged line to stdout.
///
/// # Arguments
/// * `tag` – The pre-coloured level tag (e.g. `"\x1b[32m[INFO] "`).
/// * `msg` – The already formatted message.
pub fn emit(tag: &str, msg: &str) {
    println!("{tag}[{}]\x1b[0m {msg}", chrono::Utc::now().format("%H:%M:%S"));
}

/// Returns `true` if `event!` output is enabled for this process.
pub fn events_enabled() -> bool { std::env::var_os(EVENT_LOG_VAR).is_some() }

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::emit("\x1b[32m[INFO] ", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::emit("\x1b[33m[LOG]  ", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::emit("\x1b[35m[WARN] ", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::emit("\x1b[31m[ERROR]", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if $crate::logger::events_enabled() {
            $crate::logger::emit("\x1b[36m[EVENT]", &format!($($arg)*))
        }
    };
}
