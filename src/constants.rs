//! Application constants for the rainfall analyser
//!
//! Input layout, output layout, validation bounds and console text used
//! throughout the crate.

// =============================================================================
// Input Format
// =============================================================================

/// Field delimiter for both input and output files
pub const FIELD_DELIMITER: char = ',';

/// Number of fields in an input record: year, month, day, amount
pub const INPUT_FIELD_COUNT: usize = 4;

/// Positions of each field within an input record
pub mod field_index {
    pub const YEAR: usize = 0;
    pub const MONTH: usize = 1;
    pub const DAY: usize = 2;
    pub const AMOUNT: usize = 3;
}

// =============================================================================
// Validation Bounds
// =============================================================================

/// Earliest accepted year (four-digit calendar years)
pub const DEFAULT_MIN_YEAR: i32 = 1000;

/// Latest accepted year
pub const DEFAULT_MAX_YEAR: i32 = 9999;

pub const MIN_MONTH: u32 = 1;
pub const MAX_MONTH: u32 = 12;

// =============================================================================
// Output Format
// =============================================================================

/// Header row written at the top of every output file
pub const OUTPUT_HEADER: &str = "year,month,total,min,max";

/// Suffix appended to the input file stem to name the output file
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_analysed";

/// Extension of the derived output file
pub const OUTPUT_EXTENSION: &str = "csv";

// =============================================================================
// Console
// =============================================================================

/// Prompt shown when no input path was given on the command line
pub const PATH_PROMPT: &str = "Enter path name: ";

/// Prefix of the single error line written after the prompt
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Log filter target used when `RUST_LOG` is not set
pub const LOG_TARGET: &str = "rainfall_analyser";
