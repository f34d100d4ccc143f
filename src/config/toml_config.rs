use crate::utils::error::{AnalyzerError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file.
///
/// ```toml
/// [history]
/// path = "${HOME}/.chronicler/history.json"
/// capacity = 5
/// storage_key = "chroniclerRecentFiles"
///
/// [logging]
/// json = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub history: Option<HistoryConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub path: Option<String>,
    pub capacity: Option<usize>,
    pub storage_key: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AnalyzerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the value of the environment variable `VAR`.
    /// Unset variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnalyzerError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn history_path(&self) -> Option<&str> {
        self.history.as_ref().and_then(|h| h.path.as_deref())
    }

    pub fn history_capacity(&self) -> Option<usize> {
        self.history.as_ref().and_then(|h| h.capacity)
    }

    pub fn storage_key(&self) -> Option<&str> {
        self.history.as_ref().and_then(|h| h.storage_key.as_deref())
    }

    pub fn history_enabled(&self) -> bool {
        self.history
            .as_ref()
            .and_then(|h| h.enabled)
            .unwrap_or(true)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.history_path() {
            validate_path("history.path", path)?;
        }
        if let Some(capacity) = self.history_capacity() {
            validate_positive_number("history.capacity", capacity, 1)?;
        }
        if let Some(key) = self.storage_key() {
            validate_non_empty_string("history.storage_key", key)?;
        }
        Ok(())
    }
}
