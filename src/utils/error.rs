use crate::core::distance::DistanceError;
use crate::core::validator::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input is not valid UTF-8 text: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    ValidationError(#[from] ValidationError),

    #[error("Distance computation failed: {0}")]
    DistanceError(#[from] DistanceError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("History error: {message}")]
    HistoryError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Computation,
    Configuration,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AnalyzerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EncodingError(_) | Self::ValidationError(_) => ErrorCategory::Input,
            Self::DistanceError(_) => ErrorCategory::Computation,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) | Self::HistoryError { .. } => {
                ErrorCategory::Storage
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EncodingError(_) | Self::ValidationError(_) | Self::HistoryError { .. } => {
                ErrorSeverity::Medium
            }
            Self::DistanceError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and that you have permission to read it",
            Self::SerializationError(_) => {
                "The history file may be corrupt; run `chronicler history clear` to reset it"
            }
            Self::EncodingError(_) => "Save the input as a plain UTF-8 text file",
            Self::ValidationError(_) => {
                "Each line must contain exactly two integers separated by whitespace, with at least two lines"
            }
            Self::DistanceError(_) => "Both location lists must contain the same number of entries",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            Self::HistoryError { .. } => "Run `chronicler history list` to see the recorded files",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "The input file could not be found".to_string()
            }
            Self::ValidationError(e) => e.to_string(),
            Self::EncodingError(_) => "The input file is not a text file".to_string(),
            Self::DistanceError(e) => format!("Could not compare the location lists: {}", e),
            other => other.to_string(),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_input_category() {
        let err = AnalyzerError::from(ValidationError::EmptyFile);
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.user_friendly_message(), "File is empty");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_file_message() {
        let err = AnalyzerError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "nope",
        ));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.user_friendly_message(), "The input file could not be found");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_history_error() {
        let err = AnalyzerError::HistoryError {
            message: "no entry named 'a.txt'".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.to_string(), "History error: no entry named 'a.txt'");
        assert_eq!(err.exit_code(), 2);
    }
}
