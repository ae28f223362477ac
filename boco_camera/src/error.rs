//! Error types for the Boco camera extension
//!
//! Camera operations themselves never fail: when the camera is inactive they
//! return `None`. Errors only come from reading the host configuration and
//! from the extension facade.

use std::fmt;

/// Result type for Boco camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boco camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed project file or out-of-range configuration value
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
