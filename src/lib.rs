//! Rainfall Analyser Library
//!
//! Summarises daily rainfall records into monthly statistics.
//!
//! This library provides tools for:
//! - Parsing `year,month,day,amount` lines with calendar-exact validation
//! - Grouping records by year and month in first-seen order
//! - Computing monthly total, minimum and maximum rainfall
//! - Writing the summaries as CSV, only after the whole input was accepted
//!
//! ```rust
//! use rainfall_analyser::{AnalyserConfig, RainfallAnalyser};
//! use rainfall_analyser::text_stream::ReaderSource;
//! use std::io::Cursor;
//! use std::path::Path;
//!
//! let analyser = RainfallAnalyser::new(AnalyserConfig::default()).unwrap();
//! let mut source = ReaderSource::new(Cursor::new("2022,6,1,10\n2022,6,2,20\n"));
//! let analysis = analyser.analyse(&mut source, Path::new("inline.csv")).unwrap();
//!
//! assert_eq!(analysis.summaries[0].to_csv_row(), "2022,6,30,10,20");
//! ```

pub mod analyser;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod text_stream;

// Core application services
pub mod app {
    pub mod services {
        pub mod monthly_aggregator;
        pub mod record_parser;
    }
}

// Re-export commonly used types
pub use analyser::{FileAnalysis, RainfallAnalyser, derive_output_path, write_summaries};
pub use app::services::monthly_aggregator::MonthlyAggregator;
pub use app::services::record_parser::RecordParser;
pub use config::AnalyserConfig;
pub use error::{RainfallError, RecordError, Result};
pub use models::{Analysis, AnalysisStats, MonthKey, MonthSummary, Record};
