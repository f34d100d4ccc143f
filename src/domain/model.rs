use crate::core::validator::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text read from an uploaded file, tagged with the file's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub name: String,
    pub content: String,
}

/// Two integer columns of equal length, as produced by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationLists {
    pub list1: Vec<i64>,
    pub list2: Vec<i64>,
}

impl LocationLists {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.list1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list1.is_empty()
    }
}

/// Columns extracted by the lenient parser. Lengths may differ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedLists {
    pub list1: Vec<f64>,
    pub list2: Vec<f64>,
}

impl ParsedLists {
    pub fn is_empty(&self) -> bool {
        self.list1.is_empty() && self.list2.is_empty()
    }
}

/// Serializable form of a validation outcome.
///
/// Exactly one of `error` and `parsed_data` is present. The error code is
/// available to callers but is not part of the JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_data: Option<LocationLists>,
}

impl From<Result<LocationLists, ValidationError>> for ValidationReport {
    fn from(result: Result<LocationLists, ValidationError>) -> Self {
        match result {
            Ok(lists) => Self {
                is_valid: true,
                error: None,
                code: None,
                parsed_data: Some(lists),
            },
            Err(e) => Self {
                is_valid: false,
                error: Some(e.to_string()),
                code: Some(e.code().to_string()),
                parsed_data: None,
            },
        }
    }
}

/// Outcome of the transform stage: validated lists and their distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub name: String,
    pub lists: LocationLists,
    pub distance: u64,
}

impl Analysis {
    pub fn stats(&self) -> FileStats {
        FileStats {
            list1_count: self.lists.list1.len(),
            list2_count: self.lists.list2.len(),
            distance: self.distance,
        }
    }
}

/// Cached counts and distance of an analysed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    pub list1_count: usize,
    pub list2_count: usize,
    pub distance: u64,
}

/// One entry of the recent-file history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFile {
    pub name: String,
    pub date: DateTime<Utc>,
    pub stats: FileStats,
}

/// What the CLI prints after an analysis or when a history entry is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub name: String,
    pub stats: FileStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl From<&RecentFile> for AnalysisReport {
    fn from(file: &RecentFile) -> Self {
        Self {
            name: file.name.clone(),
            stats: file.stats,
            recorded_at: Some(file.date),
        }
    }
}
