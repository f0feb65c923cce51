//! Record parser for daily rainfall CSV lines
//!
//! ## Architecture
//!
//! - [`parser`] - Line-level parsing into validated records
//! - [`field_parsers`] - Independent validators for each field
//!
//! ## Usage
//!
//! ```rust
//! use rainfall_analyser::app::services::record_parser::RecordParser;
//! use rainfall_analyser::config::AnalyserConfig;
//!
//! let parser = RecordParser::new(&AnalyserConfig::default());
//! let record = parser.parse_line("2020,2,29,12.5").unwrap();
//! assert_eq!(record.amount, 12.5);
//! ```

pub mod field_parsers;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use parser::{RecordParser, parse_record};
