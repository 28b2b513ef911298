//! CSV export of extraction results.

use crate::error::Result;
use qforms_domain::traits::ResultSink;
use qforms_domain::ExtractionResult;
use qforms_extractor::{ExtractionMode, PatternConfig};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// CSV header columns.
pub const COLUMNS: [&str; 7] = [
    "source_file",
    "speaker_id",
    "utterance",
    "utt_id",
    "region_id",
    "subtype",
    "target",
];

/// Output file name for the active pattern switches.
pub fn output_file_name(patterns: &PatternConfig) -> String {
    let mut name = match patterns.mode {
        ExtractionMode::Quotative => "coraal_q_forms".to_string(),
        ExtractionMode::Copula => "detected_copulars".to_string(),
    };
    if patterns.any_subject {
        name.push_str("_any_subject");
    }
    if patterns.copula_only && patterns.mode == ExtractionMode::Quotative {
        name.push_str("_copula_only");
    }
    name.push_str(".csv");
    name
}

/// Comma-separated writer; the header is written before the first batch.
pub struct CsvSink<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> CsvSink<W> {
    /// Create a sink over a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    /// Flush and return the writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_row<'a>(&mut self, fields: impl IntoIterator<Item = &'a str>) -> io::Result<()> {
        let row: Vec<Cow<'a, str>> = fields.into_iter().map(escape_field).collect();
        writeln!(self.writer, "{}", row.join(","))
    }
}

impl<W: Write> ResultSink for CsvSink<W> {
    type Error = io::Error;

    fn write_results(&mut self, results: &[ExtractionResult]) -> io::Result<()> {
        if !self.header_written {
            self.write_row(COLUMNS)?;
            self.header_written = true;
        }
        for result in results {
            let subtype = result.subtype.name();
            self.write_row([
                result.source_id.as_str(),
                result.speaker_id.as_str(),
                result.utterance.as_str(),
                result.utterance_id.as_str(),
                result.region_id.as_str(),
                subtype.as_str(),
                result.target.as_str(),
            ])?;
        }
        Ok(())
    }
}

/// Write results to `output_dir/file_name`, creating the directory if needed.
pub fn write_csv_file(
    output_dir: &Path,
    file_name: &str,
    results: &[ExtractionResult],
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);

    let mut sink = CsvSink::new(BufWriter::new(File::create(&path)?));
    sink.write_results(results)?;
    sink.into_inner()?;

    info!("Wrote {} rows to {}", results.len(), path.display());
    Ok(path)
}

/// Quote a field containing a comma, quote, CR or LF; double inner quotes.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
