//! Internal logging system for the Boco camera extension
//!
//! The host engine normally owns the log output, so everything goes through a
//! replaceable [`Logger`]:
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Minimum severity filter held by the extension registry
//! - File and line information for ERROR logs

use colored::*;
use std::fmt;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to forward camera logs into the host's own log
/// stream (or to capture them in tests).
///
/// # Example
///
/// ```no_run
/// use boco_camera::bococam::log::{Logger, LogEntry};
///
/// struct HostLogger;
///
/// impl Logger for HostLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host log...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "bococam::Camera", "bocokiddo")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose information (per-call conversions)
    Trace,

    /// Development information
    Debug,

    /// Camera lifecycle events (init, resize, release)
    Info,

    /// Potential issues
    Warn,

    /// Errors, always reported with file:line
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in console output.
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Format an entry as a single uncolored line.
///
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - With location: `[timestamp] [SEVERITY] [source] message (file:line)`
pub fn format_entry(entry: &LogEntry) -> String {
    render(entry, entry.severity.label(), &entry.source)
}

/// Shared line layout; severity and source are passed already styled.
fn render(entry: &LogEntry, severity: impl fmt::Display, source: impl fmt::Display) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    let mut line = format!(
        "[{}] [{}] [{}] {}",
        datetime.format("%Y-%m-%d %H:%M:%S%.3f"),
        severity,
        source,
        entry.message
    );
    if let (Some(file), Some(number)) = (entry.file, entry.line) {
        line.push_str(&format!(" ({}:{})", file, number));
    }
    line
}

/// Default logger implementation using colored console output
///
/// Same layout as [`format_entry`], with the severity colored (Trace bright
/// black, Debug cyan, Info green, Warn yellow, Error bold red) and the
/// source in bright blue.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        println!("{}", render(entry, severity, entry.source.bright_blue()));
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```ignore
/// cam_trace!("bococam::Camera", "screen_to_world {:?}", point);
/// ```
#[macro_export]
macro_rules! cam_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::bococam::Extension::log(
            $crate::bococam::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! cam_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::bococam::Extension::log(
            $crate::bococam::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// ```ignore
/// cam_info!("bococam::Camera", "Scale: {}", scale);
/// ```
#[macro_export]
macro_rules! cam_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::bococam::Extension::log(
            $crate::bococam::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! cam_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::bococam::Extension::log(
            $crate::bococam::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! cam_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::bococam::Extension::log_detailed(
            $crate::bococam::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
