//! Command-line interface components.

use crate::analyser::{FileAnalysis, RainfallAnalyser};
use crate::config::AnalyserConfig;
use crate::constants::{
    DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, DEFAULT_OUTPUT_SUFFIX, ERROR_PREFIX, LOG_TARGET,
    PATH_PROMPT,
};
use crate::text_stream::LineSource;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "rainfall-analyser")]
#[command(about = "Summarise daily rainfall CSV records into monthly total, minimum and maximum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Daily rainfall CSV file (year,month,day,amount); prompted for when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output CSV file (defaults to <input stem><suffix>.csv next to the input)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Ignore the first line of the input
    #[arg(long)]
    pub skip_header: bool,

    /// Earliest accepted year
    #[arg(long, default_value_t = DEFAULT_MIN_YEAR)]
    pub min_year: i32,

    /// Latest accepted year
    #[arg(long, default_value_t = DEFAULT_MAX_YEAR)]
    pub max_year: i32,

    /// Suffix appended to the input file stem for the derived output name
    #[arg(long, default_value = DEFAULT_OUTPUT_SUFFIX)]
    pub suffix: String,

    /// Print a monthly report to stderr after a successful run
    #[arg(long)]
    pub report: bool,

    /// Print the report as JSON instead of a table
    #[arg(long, requires = "report")]
    pub json: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the analyser configuration from the command line
    pub fn to_config(&self) -> AnalyserConfig {
        let config = AnalyserConfig::default()
            .with_year_range(self.min_year, self.max_year)
            .with_output_suffix(self.suffix.clone());

        if self.skip_header {
            config.with_skip_header()
        } else {
            config
        }
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Set up structured logging on stderr, leaving stdout for the prompt
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to install logger")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Run one analysis, prompting on `console_in`/`console_out` for the input
/// path when none was given on the command line
///
/// Analysis failures are reported as a single `ERROR: <message>` line and
/// returned as `Ok(None)`; only console failures are returned as errors.
pub fn run_session<S, W>(
    args: &Args,
    console_in: &mut S,
    console_out: &mut W,
) -> Result<Option<FileAnalysis>>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    let input = match &args.input {
        Some(path) => Some(path.clone()),
        None => prompt_for_path(console_in, console_out)?,
    };

    let outcome = match input {
        Some(input) => RainfallAnalyser::new(args.to_config())
            .and_then(|analyser| analyser.analyse_file(&input, args.output.as_deref()))
            .map_err(|e| e.to_string()),
        None => Err("failed to process file: no path name entered".to_string()),
    };

    match outcome {
        Ok(result) => {
            info!("Analysis written to {}", result.output_path.display());
            if args.json {
                report::print_json_report(&result).context("Failed to render JSON report")?;
            } else if args.report {
                report::print_report(&result);
            }
            Ok(Some(result))
        }
        Err(message) => {
            writeln!(console_out, "{}{}", ERROR_PREFIX, message)
                .context("Failed to write to console")?;
            console_out.flush().context("Failed to flush console")?;
            Ok(None)
        }
    }
}

fn prompt_for_path<S, W>(console_in: &mut S, console_out: &mut W) -> Result<Option<PathBuf>>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    write!(console_out, "{}", PATH_PROMPT).context("Failed to write prompt")?;
    console_out.flush().context("Failed to flush console")?;

    let line = console_in
        .read_line()
        .context("Failed to read user input")?;

    Ok(line
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .map(PathBuf::from))
}

/// Coloured monthly report for `--report`
pub mod report {
    use crate::analyser::FileAnalysis;
    use colored::*;

    /// Render the report lines
    pub fn format_report(result: &FileAnalysis) -> Vec<String> {
        let mut lines = Vec::with_capacity(result.analysis.summaries.len() + 3);

        lines.push(format!(
            "{} {}",
            "Monthly rainfall written to".bright_green().bold(),
            result.output_path.display()
        ));
        lines.push(format!(
            "  {:>7}  {:>12}  {:>10}  {:>10}",
            "month".bright_cyan(),
            "total".bright_cyan(),
            "min".bright_cyan(),
            "max".bright_cyan()
        ));

        for summary in &result.analysis.summaries {
            lines.push(format!(
                "  {:>7}  {:>12}  {:>10}  {:>10}",
                summary.key().to_string().as_str().bright_white(),
                summary.total,
                summary.min,
                summary.max
            ));
        }

        lines.push(format!("  {}", result.analysis.stats.summary().as_str().bright_black()));
        lines
    }

    pub fn print_report(result: &FileAnalysis) {
        for line in format_report(result) {
            eprintln!("{}", line);
        }
    }

    /// Render the monthly summaries and run statistics as pretty JSON
    pub fn format_json_report(result: &FileAnalysis) -> serde_json::Result<String> {
        serde_json::to_string_pretty(result)
    }

    pub fn print_json_report(result: &FileAnalysis) -> serde_json::Result<()> {
        eprintln!("{}", format_json_report(result)?);
        Ok(())
    }
}
