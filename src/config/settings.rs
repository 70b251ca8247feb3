//! User settings for the budget planner
//!
//! Manages ledger sizing and display preferences. Settings are read from an
//! optional JSON file; every field has a default so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::storage::DEFAULT_CAPACITY;

/// Settings for a budget planner session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum number of expenses a ledger holds
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Maximum byte length of a text field received over the C ABI
    #[serde(default = "default_max_field_length")]
    pub max_field_length: usize,

    /// Currency symbol used when formatting amounts for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Log level for the command-line client (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_max_field_length() -> usize {
    99
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_field_length: default_max_field_length(),
            currency_symbol: default_currency(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or use defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, PlannerError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| PlannerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PlannerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, path: &Path) -> Result<(), PlannerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| PlannerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings no ledger can work with
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.capacity == 0 {
            return Err(PlannerError::Config("capacity must be at least 1".into()));
        }
        if self.max_field_length == 0 {
            return Err(PlannerError::Config(
                "max_field_length must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Log level as a `log` filter, falling back to `Warn`
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Warn,
        }
    }
}
