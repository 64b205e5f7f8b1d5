// src/output/csv.rs
// =============================================================================
// CSV output: a header row, then one row per crawled page.
//
//   URL,Response,Title,Description
//   https://example.com/,200,Example Domain,
//
// The csv crate takes care of quoting titles that contain commas, quotes or
// newlines. Each row is flushed right away so the file grows as we crawl.
// =============================================================================

use super::{CrawlRecord, RecordSink};
use crate::error::Result;
use std::io::Write;

pub const HEADERS: [&str; 4] = ["URL", "Response", "Title", "Description"];

pub struct CsvSink<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    // Wraps a writer and immediately writes the header row
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(HEADERS)?;
        writer.flush()?;
        Ok(Self { writer })
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &CrawlRecord) -> Result<()> {
        let status = record.status.map(|s| s.to_string()).unwrap_or_default();
        self.writer.write_record([
            record.url.as_str(),
            status.as_str(),
            record.title.as_str(),
            record.description.as_str(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(sink: &CsvSink<Vec<u8>>) -> String {
        String::from_utf8(sink.writer.get_ref().clone()).unwrap()
    }

    #[test]
    fn test_header_is_written_up_front() {
        let sink = CsvSink::new(Vec::new()).unwrap();
        assert_eq!(written(&sink), "URL,Response,Title,Description\n");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.write_record(&CrawlRecord {
            url: "https://example.com/".to_string(),
            status: Some(200),
            title: "Hello, world".to_string(),
            description: "Say \"hi\"".to_string(),
        })
        .unwrap();

        let lines: Vec<String> = written(&sink).lines().map(str::to_string).collect();
        assert_eq!(
            lines[1],
            r#"https://example.com/,200,"Hello, world","Say ""hi""""#
        );
    }

    #[test]
    fn test_missing_status_is_an_empty_cell() {
        let mut sink = CsvSink::new(Vec::new()).unwrap();
        sink.write_record(&CrawlRecord {
            url: "https://example.com/".to_string(),
            status: None,
            title: String::new(),
            description: String::new(),
        })
        .unwrap();
        sink.finish().unwrap();

        assert!(written(&sink).ends_with("https://example.com/,,,\n"));
    }
}
