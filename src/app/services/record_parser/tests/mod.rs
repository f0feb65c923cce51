//! Test utilities for record parser testing
//!
//! Shared helpers used across the field and line parser test modules.

use crate::error::RecordError;


/// Discriminant-only view of a [`RecordError`] for concise assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MalformedLine,
    InvalidYear,
    InvalidMonth,
    InvalidDay,
    InvalidAmount,
}

pub fn failure_kind(error: &RecordError) -> FailureKind {
    match error {
        RecordError::MalformedLine { .. } => FailureKind::MalformedLine,
        RecordError::InvalidYear { .. } => FailureKind::InvalidYear,
        RecordError::InvalidMonth { .. } => FailureKind::InvalidMonth,
        RecordError::InvalidDay { .. } => FailureKind::InvalidDay,
        RecordError::InvalidAmount { .. } => FailureKind::InvalidAmount,
    }
}
