//! Extract command implementation.

use crate::config::Config;
use crate::corpus;
use crate::error::Result;
use crate::export;
use crate::output::Formatter;
use std::path::PathBuf;
use tracing::info;

/// Execute the extract command.
///
/// Returns the path of the written CSV file.
pub fn execute_extract(config: &Config, formatter: &Formatter) -> Result<PathBuf> {
    // Compile first so a bad vocabulary fails before any file is read
    let extractor = super::build_extractor(config)?;

    let files = corpus::discover(&config.paths.data_dir, &config.paths.glob)?;
    if files.is_empty() {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "No transcripts matching '{}' under {}",
                config.paths.glob,
                config.paths.data_dir.display()
            ))
        );
    }
    info!("Processing {} transcript(s)", files.len());

    let run = corpus::run_corpus(&extractor, &files);
    for failure in &run.failures {
        eprintln!("{}", formatter.error(&failure.message));
    }

    let file_name = export::output_file_name(&config.extractor.patterns);
    let path = export::write_csv_file(&config.paths.output_dir, &file_name, &run.results)?;

    println!("{}", formatter.format_run(&run, &path)?);
    Ok(path)
}
