//! Running per-month statistics
//!
//! Buckets are kept in a vector in first-seen order, with a hash index from
//! [`MonthKey`] to bucket position for constant-time lookup.

use std::collections::HashMap;

use crate::models::{MonthKey, MonthSummary, Record};

/// Running totals for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub key: MonthKey,
    pub total: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl MonthBucket {
    fn seeded(record: &Record) -> Self {
        Self {
            key: record.month_key(),
            total: record.amount,
            min: record.amount,
            max: record.amount,
            count: 1,
        }
    }

    fn add(&mut self, amount: f64) {
        self.total += amount;
        if amount < self.min {
            self.min = amount;
        }
        if amount > self.max {
            self.max = amount;
        }
        self.count += 1;
    }

    pub fn summary(&self) -> MonthSummary {
        MonthSummary {
            year: self.key.year,
            month: self.key.month,
            total: self.total,
            min: self.min,
            max: self.max,
        }
    }
}

/// Groups records by year and month
#[derive(Debug, Clone, Default)]
pub struct MonthlyAggregator {
    buckets: Vec<MonthBucket>,
    index: HashMap<MonthKey, usize>,
}

impl MonthlyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into its month's bucket
    pub fn add(&mut self, record: &Record) {
        let key = record.month_key();
        match self.index.get(&key) {
            Some(&position) => self.buckets[position].add(record.amount),
            None => {
                self.index.insert(key, self.buckets.len());
                self.buckets.push(MonthBucket::seeded(record));
            }
        }
    }

    /// One summary per month seen, in first-seen order
    ///
    /// Does not consume or reset the aggregator; repeated calls return the
    /// same rows.
    pub fn finish(&self) -> Vec<MonthSummary> {
        self.buckets.iter().map(MonthBucket::summary).collect()
    }

    /// Buckets in first-seen order
    pub fn buckets(&self) -> &[MonthBucket] {
        &self.buckets
    }

    pub fn month_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of records added
    pub fn record_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<'a> Extend<&'a Record> for MonthlyAggregator {
    fn extend<T: IntoIterator<Item = &'a Record>>(&mut self, records: T) {
        for record in records {
            self.add(record);
        }
    }
}

impl<'a> FromIterator<&'a Record> for MonthlyAggregator {
    fn from_iter<T: IntoIterator<Item = &'a Record>>(records: T) -> Self {
        let mut aggregator = Self::new();
        aggregator.extend(records);
        aggregator
    }
}
