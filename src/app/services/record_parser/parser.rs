//! Single-line record parsing for daily rainfall files
//!
//! Turns one `year,month,day,amount` line into a validated [`Record`].
//! Validation runs field by field in a fixed order and the first failing
//! field decides the error.

use std::ops::RangeInclusive;

use super::field_parsers::{parse_amount, parse_day, parse_month, parse_year, split_fields};
use crate::config::AnalyserConfig;
use crate::constants::field_index;
use crate::error::RecordError;
use crate::models::Record;

/// Parser for daily rainfall lines
#[derive(Debug, Clone)]
pub struct RecordParser {
    year_range: RangeInclusive<i32>,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(&AnalyserConfig::default())
    }
}

impl RecordParser {
    /// Create a parser using the validation bounds from `config`
    pub fn new(config: &AnalyserConfig) -> Self {
        Self {
            year_range: config.year_range(),
        }
    }

    /// Parse one raw line into a [`Record`]
    ///
    /// Checks run in order: field count, year, month, day, amount.
    pub fn parse_line(&self, line: &str) -> Result<Record, RecordError> {
        let fields = split_fields(line)?;

        let year = parse_year(fields[field_index::YEAR], &self.year_range)?;
        let month = parse_month(fields[field_index::MONTH])?;
        let day = parse_day(fields[field_index::DAY], year, month)?;
        let amount = parse_amount(fields[field_index::AMOUNT])?;

        Ok(Record {
            year,
            month,
            day,
            amount,
        })
    }
}

/// Parse a line with the default validation bounds
pub fn parse_record(line: &str) -> Result<Record, RecordError> {
    RecordParser::default().parse_line(line)
}
