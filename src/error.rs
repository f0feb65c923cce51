//! Error handling for rainfall analysis operations.
//!
//! Two layers: [`RecordError`] classifies why a single input line was
//! rejected, and [`RainfallError`] covers everything that can abort a run.
//! The display text of every run-level error carries one of the two
//! user-facing diagnostics, `failed to process file` or `file is empty`.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single line could not become a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("malformed line: expected {expected} fields, found {found}")]
    MalformedLine { expected: usize, found: usize },

    #[error("invalid year '{value}'")]
    InvalidYear { value: String },

    #[error("invalid month '{value}'")]
    InvalidMonth { value: String },

    #[error("invalid day '{value}' for {year}-{month:02}")]
    InvalidDay { value: String, year: i32, month: u32 },

    #[error("invalid rainfall amount '{value}'")]
    InvalidAmount { value: String },
}

#[derive(Error, Debug)]
pub enum RainfallError {
    #[error("failed to process file: {path} not found")]
    FileNotFound { path: PathBuf },

    #[error("failed to process file: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    #[error("failed to process file: line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("failed to process file: configuration error: {message}")]
    Configuration { message: String },
}

impl RainfallError {
    /// Map an I/O failure on `path`, promoting a missing file to [`RainfallError::FileNotFound`]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The record-level cause, if the run was aborted by a bad line
    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            Self::InvalidRecord { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RainfallError>;
