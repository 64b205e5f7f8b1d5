// src/output/mod.rs
// =============================================================================
// Where crawl results go.
//
// The scheduler only knows about the RecordSink trait: it calls
// write_record() once per fetched page and finish() once when the frontier
// is empty. The concrete sinks decide the file format.
//
// Submodules:
// - csv: URL,Response,Title,Description rows (the default)
// - json: one JSON object per line
// =============================================================================

mod csv;
mod json;

pub use self::csv::CsvSink;
pub use self::json::JsonLinesSink;

use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// One row of output: a successfully fetched, in-scope page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlRecord {
    pub url: String,
    /// HTTP status; None if the page had no response to report
    pub status: Option<u16>,
    pub title: String,
    pub description: String,
}

pub trait RecordSink {
    // Writes one record. Sinks flush here so partial crawls leave usable output.
    fn write_record(&mut self, record: &CrawlRecord) -> Result<()>;

    // Called once, after the last record
    fn finish(&mut self) -> Result<()>;
}

impl<S: RecordSink + ?Sized> RecordSink for Box<S> {
    fn write_record(&mut self, record: &CrawlRecord) -> Result<()> {
        (**self).write_record(record)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// JSON Lines: one object per page
    Json,
}

// Creates (or truncates) the output file and wraps it in the right sink
pub fn create_sink(path: &Path, format: OutputFormat) -> Result<Box<dyn RecordSink>> {
    let file = File::create(path)?;
    let sink: Box<dyn RecordSink> = match format {
        OutputFormat::Csv => Box::new(CsvSink::new(file)?),
        OutputFormat::Json => Box::new(JsonLinesSink::new(BufWriter::new(file))),
    };
    Ok(sink)
}

// Collects records in memory so tests can inspect them
#[cfg(test)]
impl RecordSink for Vec<CrawlRecord> {
    fn write_record(&mut self, record: &CrawlRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
