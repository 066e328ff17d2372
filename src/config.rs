//! Report limits and config-file loading
//!
//! Limits are constructed once at startup and passed by reference into the
//! scanner and comparator. They are never ambient global state.

use crate::error::{BytediffError, Result};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory unless overridden
pub const CONFIG_FILE_NAME: &str = "bytediff.cfg";

/// Default maximum number of divergence runs rendered per file pair
pub const DEFAULT_MAX_RUNS: usize = 10;

/// Default maximum characters rendered per preview line
pub const DEFAULT_MAX_LINE_CHARS: usize = 60;

/// Default maximum characters for a whole per-pair report
pub const DEFAULT_MAX_TOTAL_CHARS: usize = 10_000;

/// Bounds on the volume of divergence output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    pub max_runs: usize,
    pub max_line_chars: usize,
    pub max_total_chars: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            max_runs: DEFAULT_MAX_RUNS,
            max_line_chars: DEFAULT_MAX_LINE_CHARS,
            max_total_chars: DEFAULT_MAX_TOTAL_CHARS,
        }
    }
}

impl ReportLimits {
    /// Load limits from a config file, falling back to defaults when the
    /// file does not exist. Malformed content is a fatal config error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let limits = Self::parse(&content)?;
        log::debug!("loaded limits from {}: {:?}", path.display(), limits);
        Ok(limits)
    }

    /// Parse `key: value` lines. Blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Result<Self> {
        let mut limits = Self::default();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once(':').ok_or_else(|| {
                BytediffError::config(format!(
                    "line {}: expected 'key: value', got '{}'",
                    index + 1,
                    line
                ))
            })?;

            let key = key.trim();
            let value: usize = value.trim().parse().map_err(|_| {
                BytediffError::config(format!(
                    "line {}: invalid value for '{}': '{}'",
                    index + 1,
                    key,
                    value.trim()
                ))
            })?;

            match key {
                "max_runs" => limits.max_runs = value,
                "max_line_chars" => limits.max_line_chars = value,
                "max_total_chars" => limits.max_total_chars = value,
                _ => {
                    return Err(BytediffError::config(format!(
                        "line {}: unknown key '{}'",
                        index + 1,
                        key
                    )))
                }
            }
        }

        Ok(limits)
    }
}
