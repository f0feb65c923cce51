//! Main analysis pipeline.
//!
//! Reads every line from a [`LineSource`], parses it into a record, folds
//! the records into monthly buckets and, only once the whole input has been
//! accepted, writes the summaries to a [`LineSink`]. Any bad line aborts
//! the run before anything is written.

use crate::app::services::monthly_aggregator::MonthlyAggregator;
use crate::app::services::record_parser::RecordParser;
use crate::config::AnalyserConfig;
use crate::constants::{OUTPUT_EXTENSION, OUTPUT_HEADER};
use crate::error::{RainfallError, Result};
use crate::models::{Analysis, AnalysisStats, MonthSummary};
use crate::text_stream::{LineSink, LineSource, ReaderSource, WriterSink};

use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of analysing a file on disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileAnalysis {
    pub analysis: Analysis,
    pub output_path: PathBuf,
}

/// Rainfall analysis pipeline
#[derive(Debug, Clone)]
pub struct RainfallAnalyser {
    config: AnalyserConfig,
    parser: RecordParser,
}

impl RainfallAnalyser {
    /// Create an analyser, rejecting an invalid configuration
    pub fn new(config: AnalyserConfig) -> Result<Self> {
        config.validate()?;
        let parser = RecordParser::new(&config);
        Ok(Self { config, parser })
    }

    /// Parse and aggregate every line of `source`
    ///
    /// `origin` names the source in error messages. Fails with
    /// [`RainfallError::EmptyFile`] when there are no data lines and with
    /// [`RainfallError::InvalidRecord`] on the first line that does not parse.
    pub fn analyse<S: LineSource + ?Sized>(&self, source: &mut S, origin: &Path) -> Result<Analysis> {
        let mut stats = AnalysisStats::default();
        let mut next_line = |stats: &mut AnalysisStats| -> Result<Option<String>> {
            let line = source
                .read_line()
                .map_err(|e| RainfallError::io(origin, e))?;
            if line.is_some() {
                stats.lines_read += 1;
            }
            Ok(line)
        };

        let mut line = next_line(&mut stats)?;
        if self.config.skip_header && line.is_some() {
            debug!("Skipping header line of {}", origin.display());
            stats.header_skipped = true;
            line = next_line(&mut stats)?;
        }

        if line.is_none() {
            return Err(RainfallError::EmptyFile {
                path: origin.to_path_buf(),
            });
        }

        let mut aggregator = MonthlyAggregator::new();
        while let Some(raw) = line {
            let record = self.parser.parse_line(&raw).map_err(|source| {
                warn!(
                    "Rejected line {} of {}: {}",
                    stats.lines_read,
                    origin.display(),
                    source
                );
                RainfallError::InvalidRecord {
                    line: stats.lines_read,
                    source,
                }
            })?;

            aggregator.add(&record);
            stats.records_parsed += 1;
            line = next_line(&mut stats)?;
        }

        let summaries = aggregator.finish();
        stats.months = summaries.len();
        debug!("{}", stats.summary());

        Ok(Analysis { summaries, stats })
    }

    /// Analyse `input` and write the summaries to `output`, or to the path
    /// derived from `input` when `output` is `None`
    ///
    /// The output file is only created after the whole input was accepted.
    pub fn analyse_file(&self, input: &Path, output: Option<&Path>) -> Result<FileAnalysis> {
        let start_time = Instant::now();
        let output_path = match output {
            Some(path) => path.to_path_buf(),
            None => derive_output_path(input, &self.config.output_suffix),
        };

        if output_path.as_path() == input {
            return Err(RainfallError::configuration(format!(
                "output path {} would overwrite the input",
                output_path.display()
            )));
        }

        info!("Analysing {}", input.display());
        let file = File::open(input).map_err(|e| RainfallError::io(input, e))?;
        let mut source = ReaderSource::new(BufReader::new(file));
        let analysis = self.analyse(&mut source, input)?;

        write_output_file(&analysis.summaries, &output_path)?;

        info!(
            "Wrote {} monthly summaries to {} in {}ms",
            analysis.summaries.len(),
            output_path.display(),
            start_time.elapsed().as_millis()
        );
        info!("{}", analysis.stats.summary());

        Ok(FileAnalysis {
            analysis,
            output_path,
        })
    }
}

/// Write the header row followed by one row per summary
pub fn write_summaries<K: LineSink + ?Sized>(
    summaries: &[MonthSummary],
    sink: &mut K,
) -> std::io::Result<()> {
    sink.write_line(OUTPUT_HEADER)?;
    for summary in summaries {
        sink.write_line(&summary.to_csv_row())?;
    }
    sink.flush()
}

/// Create `path` and write the summaries to it, removing the file again if
/// writing fails part way
fn write_output_file(summaries: &[MonthSummary], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| RainfallError::io(path, e))?;
    let mut sink = WriterSink::new(BufWriter::new(file));

    if let Err(e) = write_summaries(summaries, &mut sink) {
        drop(sink);
        if let Err(remove_error) = fs::remove_file(path) {
            warn!(
                "Could not remove incomplete output {}: {}",
                path.display(),
                remove_error
            );
        }
        return Err(RainfallError::io(path, e));
    }

    Ok(())
}

/// Output path for `input`: same directory, stem plus `suffix`, `.csv`
///
/// `data/rainy.csv` becomes `data/rainy_analysed.csv`.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    input.with_file_name(format!("{}{}.{}", stem, suffix, OUTPUT_EXTENSION))
}

#[cfg(test)]
mod tests;
