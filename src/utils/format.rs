//! Plain-text rendering of analysis results and history for the terminal.

use crate::domain::model::{AnalysisReport, RecentFile};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `2026-10-19T..` -> `"Oct 19, 2026"`.
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Location Lists Analysis: {}", report.name);
    let _ = writeln!(
        out,
        "  Locations in List 1:          {}",
        group_thousands(report.stats.list1_count as u64)
    );
    let _ = writeln!(
        out,
        "  Locations in List 2:          {}",
        group_thousands(report.stats.list2_count as u64)
    );
    let _ = write!(
        out,
        "  Total Distance Between Lists: {}",
        group_thousands(report.stats.distance)
    );
    if let Some(date) = &report.recorded_at {
        let _ = write!(out, "\n  Recorded:                     {}", short_date(date));
    }
    out
}

pub fn render_history(files: &[RecentFile]) -> String {
    if files.is_empty() {
        return "No recently uploaded files".to_string();
    }

    let mut out = String::new();
    let noun = if files.len() == 1 { "file" } else { "files" };
    let _ = write!(out, "Recently Uploaded Files ({} {})", files.len(), noun);
    for file in files {
        let _ = write!(
            out,
            "\n  {}  [{}]  List 1: {}  List 2: {}  Distance: {}",
            file.name,
            short_date(&file.date),
            group_thousands(file.stats.list1_count as u64),
            group_thousands(file.stats.list2_count as u64),
            group_thousands(file.stats.distance)
        );
    }
    out
}
