//! Test utilities for monthly aggregation testing

use crate::models::Record;

// Test modules
mod aggregator_tests;

/// Helper to build a record without going through the parser
pub fn record(year: i32, month: u32, day: u32, amount: f64) -> Record {
    Record {
        year,
        month,
        day,
        amount,
    }
}
