#[cfg(feature = "cli")]
pub mod cli;
pub mod local;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, HistoryAction};

use crate::core::history::{DEFAULT_CAPACITY, DEFAULT_STORAGE_KEY};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use toml_config::TomlConfig;

pub const DEFAULT_HISTORY_PATH: &str = ".chronicler/history.json";

/// Resolved runtime settings: command line flags layered over the optional
/// TOML file, layered over built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub history_path: String,
    pub history_capacity: usize,
    pub storage_key: String,
    pub record_history: bool,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_path: DEFAULT_HISTORY_PATH.to_string(),
            history_capacity: DEFAULT_CAPACITY,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            record_history: true,
            json_logs: false,
            verbose: false,
        }
    }
}

impl Settings {
    /// Apply the values set in `file` on top of the defaults.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            history_path: file
                .history_path()
                .map(str::to_string)
                .unwrap_or(defaults.history_path),
            history_capacity: file.history_capacity().unwrap_or(defaults.history_capacity),
            storage_key: file
                .storage_key()
                .map(str::to_string)
                .unwrap_or(defaults.storage_key),
            record_history: file.history_enabled(),
            json_logs: file.json_logs(),
            verbose: file.verbose(),
        }
    }
}

impl ConfigProvider for Settings {
    fn history_path(&self) -> &str {
        &self.history_path
    }

    fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn record_history(&self) -> bool {
        self.record_history
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("history_path", &self.history_path)?;
        validate_positive_number("history_capacity", self.history_capacity, 1)?;
        validate_non_empty_string("storage_key", &self.storage_key)?;
        Ok(())
    }
}
