pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::local::{JsonFileStore, LocalStorage};
pub use crate::config::Settings;

pub use crate::core::distance::{calculate_distance, Coordinate, DistanceError};
pub use crate::core::engine::AnalyzerEngine;
pub use crate::core::history::RecentFiles;
pub use crate::core::parser::parse_input_file;
pub use crate::core::pipeline::{analyze_content, AnalysisPipeline};
pub use crate::core::validator::{validate_input_file, ValidationError, ValidationErrorCode};
pub use crate::domain::model::{
    AnalysisReport, FileStats, LocationLists, ParsedLists, RecentFile, ValidationReport,
};
pub use crate::utils::error::{AnalyzerError, Result};
