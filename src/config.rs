//! Configuration management and validation.
//!
//! Provides the settings that control record validation and output
//! naming for an analysis run.

use crate::constants::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, DEFAULT_OUTPUT_SUFFIX};
use crate::error::{RainfallError, Result};
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;
use tracing::debug;

/// Global configuration for rainfall analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyserConfig {
    /// Earliest accepted year
    pub min_year: i32,

    /// Latest accepted year
    pub max_year: i32,

    /// Treat the first line of the input as a header and ignore it
    pub skip_header: bool,

    /// Appended to the input file stem to name the output file
    pub output_suffix: String,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            skip_header: false,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl AnalyserConfig {
    /// Restrict accepted years to `min..=max`
    pub fn with_year_range(mut self, min: i32, max: i32) -> Self {
        self.min_year = min;
        self.max_year = max;
        self
    }

    /// Ignore the first input line
    pub fn with_skip_header(mut self) -> Self {
        self.skip_header = true;
        self
    }

    /// Set the output file suffix
    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }

    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(RainfallError::configuration(format!(
                "min year {} is after max year {}",
                self.min_year, self.max_year
            )));
        }

        let calendar = NaiveDate::MIN.year()..=NaiveDate::MAX.year();
        if !calendar.contains(&self.min_year) || !calendar.contains(&self.max_year) {
            return Err(RainfallError::configuration(format!(
                "year range {}..={} is outside the supported calendar {}..={}",
                self.min_year,
                self.max_year,
                calendar.start(),
                calendar.end()
            )));
        }

        if self.output_suffix.is_empty() {
            return Err(RainfallError::configuration(
                "output suffix must not be empty; the output would overwrite the input",
            ));
        }

        debug!("Validated configuration: {:?}", self);
        Ok(())
    }
}
