//! Scan command implementation.

use crate::cli::ScanArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the scan command.
pub fn execute_scan(args: ScanArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if args.text.trim().is_empty() {
        return Err(CliError::InvalidInput("Text to scan must not be empty".to_string()));
    }

    let extractor = super::build_extractor(config)?;
    let matches = extractor.scan(&args.text);
    println!("{}", formatter.format_matches(&matches)?);
    Ok(())
}
