//! Corpus discovery and per-file processing.

use crate::error::Result;
use anyhow::Context;
use qforms_domain::ExtractionResult;
use qforms_extractor::{Extractor, LineStats, TranscriptExtraction};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A transcript that could not be processed.
#[derive(Debug, Clone)]
pub struct FileFailure {
    /// Path of the transcript
    pub path: PathBuf,

    /// Error chain, outermost first
    pub message: String,
}

/// Outcome of a run over a list of transcripts.
#[derive(Debug, Clone, Default)]
pub struct CorpusRun {
    /// Results of every processed file, in file order
    pub results: Vec<ExtractionResult>,

    /// Line counters summed over processed files
    pub stats: LineStats,

    /// Number of files processed successfully
    pub processed: usize,

    /// Files that failed
    pub failures: Vec<FileFailure>,
}

/// Find transcripts under `data_dir` matching `pattern`, in sorted order.
pub fn discover(data_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let root = glob::Pattern::escape(&data_dir.to_string_lossy());
    let full = format!("{}/{}", root.trim_end_matches('/'), pattern);

    let mut files = Vec::new();
    for entry in glob::glob(&full)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable path: {}", e),
        }
    }
    files.sort();
    Ok(files)
}

/// Source identifier of a transcript: its file stem.
pub fn source_id(path: &Path) -> Option<String> {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
}

/// Process every file; a failing file is recorded and the run continues.
pub fn run_corpus(extractor: &Extractor, files: &[PathBuf]) -> CorpusRun {
    let mut run = CorpusRun::default();

    for path in files {
        match process_file(extractor, path) {
            Ok(extraction) => {
                info!(
                    "{}: {} results from {} lines",
                    extraction.source_id,
                    extraction.results.len(),
                    extraction.stats.total_lines
                );
                run.stats += extraction.stats;
                run.results.extend(extraction.results);
                run.processed += 1;
            }
            Err(e) => {
                let message = format!("{:#}", e);
                warn!("{}", message);
                run.failures.push(FileFailure {
                    path: path.clone(),
                    message,
                });
            }
        }
    }

    run
}

fn process_file(extractor: &Extractor, path: &Path) -> anyhow::Result<TranscriptExtraction> {
    let source_id =
        source_id(path).with_context(|| format!("No file name in {}", path.display()))?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    extractor
        .process_transcript(&source_id, &text)
        .with_context(|| format!("Failed to process {}", path.display()))
}
