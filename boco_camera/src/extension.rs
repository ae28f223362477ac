/// Boco camera extension facade
///
/// Holds the only process-wide state of the crate: the logger registry.
/// Camera state is NOT stored here, it lives in a caller-owned
/// `CameraTransform` value.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::config::{ConfigSource, DisplayConfig};
use crate::error::{Error, Result};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger registry (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<LoggerState>> = OnceLock::new();

/// Registered logger and the minimum severity it receives
struct LoggerState {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

impl LoggerState {
    fn new() -> Self {
        Self {
            logger: Box::new(DefaultLogger),
            min_severity: LogSeverity::Trace,
        }
    }
}

fn logger_state() -> &'static RwLock<LoggerState> {
    LOGGER.get_or_init(|| RwLock::new(LoggerState::new()))
}

/// Application events forwarded by the host.
///
/// Only `Deactivate` and `Deiconify` change camera state (suspend/resume);
/// the other two are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Application gained focus
    Activate,
    /// Application lost focus
    Deactivate,
    /// Window minimized
    Iconify,
    /// Window restored
    Deiconify,
}

// ===== PUBLIC API =====

/// Extension-level entry points
///
/// # Example
///
/// ```no_run
/// use std::collections::HashMap;
/// use boco_camera::bococam::Extension;
///
/// let mut settings: HashMap<String, i64> = HashMap::new();
/// settings.insert("display.width".to_string(), 1920);
/// settings.insert("display.height".to_string(), 1080);
///
/// let display = Extension::app_initialize(&settings)?;
/// assert_eq!(display.width, 1920);
/// # Ok::<(), boco_camera::bococam::Error>(())
/// ```
pub struct Extension;

impl Extension {
    /// Log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        crate::cam_error!("bococam::Extension", "{}", error);
        error
    }

    /// Read the reference display size from the host configuration.
    ///
    /// Called once at application startup. Missing keys fall back to
    /// 1280x720.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if a display dimension is not a
    /// positive 32-bit value.
    pub fn app_initialize<S: ConfigSource + ?Sized>(source: &S) -> Result<DisplayConfig> {
        let display = DisplayConfig::from_source(source)
            .map_err(Self::log_and_return_error)?;

        crate::cam_info!(
            "bococam::Extension",
            "App initialized with display {}x{}",
            display.width,
            display.height
        );

        Ok(display)
    }

    // ===== LOGGING API =====

    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut state) = logger_state().write() {
            state.logger = Box::new(logger);
        }
    }

    /// Reset logger to DefaultLogger and the filter to Trace
    pub fn reset_logger() {
        if let Ok(mut state) = logger_state().write() {
            *state = LoggerState::new();
        }
    }

    /// Drop entries below `severity` before they reach the logger
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut state) = logger_state().write() {
            state.min_severity = severity;
        }
    }

    /// Current minimum severity
    pub fn min_severity() -> LogSeverity {
        logger_state()
            .read()
            .map(|state| state.min_severity)
            .unwrap_or(LogSeverity::Trace)
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like cam_info!, cam_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Internal logging method with file:line information
    ///
    /// Used by the cam_error! macro.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if let Ok(state) = logger_state().read() {
            if severity < state.min_severity {
                return;
            }
            state.logger.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
