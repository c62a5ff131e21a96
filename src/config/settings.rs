//! User settings for fintrack
//!
//! Manages preferences for the command-line front end: how many
//! transactions `recent` shows, the default trend window, and whether
//! mutations are written to the audit log.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::LedgerError;
use crate::storage::write_json_atomic;

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Number of transactions `recent` shows by default
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// Default window for `trend`, in days
    #[serde(default = "default_trend_days")]
    pub trend_days: u32,

    /// Whether ledger mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_recent_count() -> usize {
    10
}

fn default_trend_days() -> u32 {
    30
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            recent_count: default_recent_count(),
            trend_days: default_trend_days(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
