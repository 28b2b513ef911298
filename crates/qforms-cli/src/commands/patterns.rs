//! Patterns command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the patterns command.
pub fn execute_patterns(config: &Config, formatter: &Formatter) -> Result<()> {
    let extractor = super::build_extractor(config)?;
    println!("{}", formatter.format_patterns(extractor.registry())?);
    Ok(())
}
