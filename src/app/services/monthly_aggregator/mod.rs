//! Monthly aggregation of daily rainfall records
//!
//! [`MonthlyAggregator`] accumulates parsed records and produces one
//! [`MonthSummary`](crate::models::MonthSummary) per distinct year and month,
//! in the order each month first appeared in the input.

pub mod aggregator;

#[cfg(test)]
pub mod tests;

pub use aggregator::{MonthBucket, MonthlyAggregator};
