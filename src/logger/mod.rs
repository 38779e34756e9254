//! Structured console logging for nftviewer
//!
//! Scaled-down logger with standard levels and per-module tags:
//! - Errors are always shown
//! - `--quiet` suppresses everything below ERROR
//! - `--debug` enables DEBUG output
//!
//! User-facing protocol text (the prompt, the NFT blocks, the localized
//! diagnostics) goes through plain `println!` in the viewer; this logger
//! carries operational lines only.

mod format;
mod levels;
mod tags;

pub use levels::LogLevel;
pub use tags::LogTag;

use crate::arguments;
use once_cell::sync::OnceCell;

static MIN_LEVEL: OnceCell<LogLevel> = OnceCell::new();

/// Initialize the logger system
///
/// Call once at startup, before any logging occurs. Reads the process
/// arguments to pick the minimum level.
pub fn init() {
    let min_level = if arguments::is_debug_enabled() {
        LogLevel::Debug
    } else if arguments::is_quiet_enabled() {
        LogLevel::Error
    } else {
        LogLevel::Info
    };
    let _ = MIN_LEVEL.set(min_level);
}

fn should_log(level: LogLevel) -> bool {
    // Errors always log
    if level == LogLevel::Error {
        return true;
    }
    let min = MIN_LEVEL.get().copied().unwrap_or(LogLevel::Info);
    level <= min
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(level) {
        return;
    }
    format::format_and_log(tag, level, message);
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues)
pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (gated by --debug)
pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_pass_filter() {
        assert!(should_log(LogLevel::Error));
    }

    #[test]
    fn test_debug_filtered_at_default_level() {
        // MIN_LEVEL unset in tests falls back to Info
        assert!(!should_log(LogLevel::Debug));
        assert!(should_log(LogLevel::Info));
    }
}
