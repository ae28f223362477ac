//! Host configuration
//!
//! The only settings the camera reads are the reference display size,
//! `display.width` and `display.height`, taken from the host project file
//! once at startup.

use std::collections::HashMap;
use crate::error::{Error, Result};

/// Default reference display width
pub const DEFAULT_DISPLAY_WIDTH: u32 = 1280;

/// Default reference display height
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 720;

/// Read access to integer settings of the host configuration.
///
/// Keys are `section.key`, e.g. `display.width`.
pub trait ConfigSource {
    /// Value for `key`, or `default` when the key is absent.
    fn get_int(&self, key: &str, default: i64) -> i64;
}

impl ConfigSource for HashMap<String, i64> {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).copied().unwrap_or(default)
    }
}

/// Reference display size the game was authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Reference width in pixels
    pub width: u32,
    /// Reference height in pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            height: DEFAULT_DISPLAY_HEIGHT,
        }
    }
}

impl DisplayConfig {
    /// Read `display.width` / `display.height` from `source`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if either value is zero, negative, or does not
    /// fit in a `u32`.
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self> {
        let width = read_dimension(source, "display.width", DEFAULT_DISPLAY_WIDTH)?;
        let height = read_dimension(source, "display.height", DEFAULT_DISPLAY_HEIGHT)?;
        Ok(Self { width, height })
    }
}

fn read_dimension<S: ConfigSource + ?Sized>(source: &S, key: &str, default: u32) -> Result<u32> {
    let value = source.get_int(key, i64::from(default));
    if value <= 0 {
        return Err(Error::InvalidConfig(format!("{} must be positive, got {}", key, value)));
    }
    u32::try_from(value)
        .map_err(|_| Error::InvalidConfig(format!("{} out of range: {}", key, value)))
}

/// Parsed host project file (`game.project` style).
///
/// ```text
/// [display]
/// width = 1920
/// height = 1080
/// ```
///
/// Every `key = value` line under a `[section]` header is stored as
/// `section.key`. Values are kept as text; `get_int` reads their leading
/// integer on demand.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    entries: HashMap<String, String>,
}

impl ProjectConfig {
    /// Parse project file text.
    ///
    /// Blank lines and lines starting with `#` or `;` are skipped.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` for a line that is not a header or a
    /// `key = value` pair, or for a pair outside any section.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        let mut section: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim();
                if name.is_empty() {
                    return Err(Error::InvalidConfig(format!("line {}: empty section name", index + 1)));
                }
                section = Some(name.to_string());
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                Error::InvalidConfig(format!("line {}: expected `key = value`, got `{}`", index + 1, line))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::InvalidConfig(format!("line {}: empty key", index + 1)));
            }
            let section = section.as_deref().ok_or_else(|| {
                Error::InvalidConfig(format!("line {}: `{}` is outside any section", index + 1, key))
            })?;

            entries.insert(format!("{}.{}", section, key), value.trim().to_string());
        }

        Ok(Self { entries })
    }

    /// Raw text value for `section.key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of parsed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries were parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigSource for ProjectConfig {
    // Reads the leading integer like the host config API: `1920.0` and
    // `1920 ; note` both give 1920. No leading digits gives `default`.
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(leading_int)
            .unwrap_or(default)
    }
}

/// Optional sign followed by decimal digits at the start of `value`.
fn leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let digits_start = usize::from(value.starts_with(['+', '-']));
    let digits_len = value[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    value[..digits_start + digits_len].parse().ok()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
