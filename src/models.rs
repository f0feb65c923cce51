//! Core data structures for rainfall analysis.
//!
//! Defines the validated daily record, the grouping key, the per-month
//! summary written to the output file and the statistics of one run.

use serde::Serialize;
use std::fmt;

/// One validated daily rainfall observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Rainfall depth, never negative
    pub amount: f64,
}

impl Record {
    /// Grouping key of this record
    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month: self.month,
        }
    }
}

/// Grouping identity of a record: calendar year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Aggregated rainfall for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub total: f64,
    pub min: f64,
    pub max: f64,
}

impl MonthSummary {
    pub fn key(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month: self.month,
        }
    }

    /// Render as an output data row (`year,month,total,min,max`)
    pub fn to_csv_row(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.year,
            self.month,
            self.total,
            self.min,
            self.max,
            sep = crate::constants::FIELD_DELIMITER
        )
    }
}

/// Statistics for one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisStats {
    /// Lines read from the source, header included
    pub lines_read: usize,
    /// Lines that became records
    pub records_parsed: usize,
    /// Distinct months in the output
    pub months: usize,
    /// Whether the first line was dropped as a header
    pub header_skipped: bool,
}

impl AnalysisStats {
    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Analysis Summary: {} lines read, {} records parsed, {} months{}",
            self.lines_read,
            self.records_parsed,
            self.months,
            if self.header_skipped {
                " (header skipped)"
            } else {
                ""
            }
        )
    }
}

/// Finished output of one run: summaries in first-seen order plus statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub summaries: Vec<MonthSummary>,
    pub stats: AnalysisStats,
}
