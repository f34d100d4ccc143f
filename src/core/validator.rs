//! Strict validation of uploaded location files.
//!
//! A valid file has one record per line, each record being exactly two
//! whitespace-separated integers, with at least two records overall. Blank
//! lines are ignored and do not count towards the line numbers reported in
//! error messages.

use crate::domain::model::LocationLists;
use std::fmt;
use thiserror::Error;

/// Minimum number of data rows a valid file must carry.
pub const MIN_ROWS: usize = 2;

/// First problem found while validating a file.
///
/// Line numbers are 1-based positions in the list of non-blank lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File is empty")]
    EmptyFile,

    #[error("Invalid format on line {line}: Expected 2 numbers separated by whitespace")]
    MalformedLine { line: usize },

    #[error("Invalid numbers on line {line}: Both values must be numbers")]
    NonNumericValue { line: usize },

    #[error("Only integer values allowed on line {line}")]
    NonIntegerValue { line: usize },

    #[error("Value out of range on line {line}: integers must fit in 64 bits")]
    ValueOutOfRange { line: usize },

    #[error("File must contain at least 2 rows of data")]
    InsufficientRows { rows: usize },
}

/// Stable machine-readable identifier for a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    EmptyFile,
    MalformedLine,
    NonNumericValue,
    NonIntegerValue,
    ValueOutOfRange,
    InsufficientRows,
}

impl ValidationErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyFile => "empty_file",
            Self::MalformedLine => "malformed_line",
            Self::NonNumericValue => "non_numeric_value",
            Self::NonIntegerValue => "non_integer_value",
            Self::ValueOutOfRange => "value_out_of_range",
            Self::InsufficientRows => "insufficient_rows",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValidationError {
    pub const fn code(&self) -> ValidationErrorCode {
        match self {
            Self::EmptyFile => ValidationErrorCode::EmptyFile,
            Self::MalformedLine { .. } => ValidationErrorCode::MalformedLine,
            Self::NonNumericValue { .. } => ValidationErrorCode::NonNumericValue,
            Self::NonIntegerValue { .. } => ValidationErrorCode::NonIntegerValue,
            Self::ValueOutOfRange { .. } => ValidationErrorCode::ValueOutOfRange,
            Self::InsufficientRows { .. } => ValidationErrorCode::InsufficientRows,
        }
    }

    /// Offending line, when the error is tied to one.
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line }
            | Self::NonNumericValue { line }
            | Self::NonIntegerValue { line }
            | Self::ValueOutOfRange { line } => Some(*line),
            Self::EmptyFile | Self::InsufficientRows { .. } => None,
        }
    }
}

// Ordered by precedence: a non-numeric token on a line is reported before a
// fractional one, which is reported before an out-of-range one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TokenFault {
    NotANumber,
    NotAnInteger,
    OutOfRange,
}

/// Read `token` as a number, or `None` when it is not one.
///
/// Decimal and exponent forms are numbers. NaN never is, and infinity only
/// when spelled `Infinity` (optionally signed); `inf` and other spellings
/// are rejected.
pub(crate) fn parse_number(token: &str) -> Option<f64> {
    let value: f64 = token.parse().ok()?;
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() && token.trim_start_matches(['+', '-']) != "Infinity" {
        return None;
    }
    Some(value)
}

fn parse_integer(token: &str) -> Result<i64, TokenFault> {
    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }

    // `2.0` and `1e3` are integers while `1.5` is a number but not an integer.
    let value = parse_number(token).ok_or(TokenFault::NotANumber)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(TokenFault::NotAnInteger);
    }
    // i64::MAX is not representable as f64; its nearest value is 2^63.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(TokenFault::OutOfRange);
    }
    Ok(value as i64)
}

fn parse_row(line: &str, line_number: usize) -> Result<(i64, i64), ValidationError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [first, second] = tokens.as_slice() else {
        return Err(ValidationError::MalformedLine { line: line_number });
    };

    match (parse_integer(first), parse_integer(second)) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (first, second) => {
            let fault = [first.err(), second.err()]
                .into_iter()
                .flatten()
                .min()
                .unwrap_or(TokenFault::NotANumber);
            Err(match fault {
                TokenFault::NotANumber => ValidationError::NonNumericValue { line: line_number },
                TokenFault::NotAnInteger => ValidationError::NonIntegerValue { line: line_number },
                TokenFault::OutOfRange => ValidationError::ValueOutOfRange { line: line_number },
            })
        }
    }
}

/// Validate `content` and, in the same pass, collect its two columns.
///
/// Stops at the first offending line. Never panics; every failure is
/// reported through the returned [`ValidationError`].
pub fn validate_input_file(content: &str) -> Result<LocationLists, ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyFile);
    }

    let mut lists = LocationLists::default();
    let rows = content.lines().filter(|line| !line.trim().is_empty());
    for (index, line) in rows.enumerate() {
        let (a, b) = parse_row(line, index + 1)?;
        lists.list1.push(a);
        lists.list2.push(b);
    }

    if lists.len() < MIN_ROWS {
        return Err(ValidationError::InsufficientRows { rows: lists.len() });
    }

    Ok(lists)
}
