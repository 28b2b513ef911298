//! Command implementations.

pub mod extract;
pub mod patterns;
pub mod scan;

pub use self::extract::execute_extract;
pub use self::patterns::execute_patterns;
pub use self::scan::execute_scan;

use crate::config::Config;
use crate::error::Result;
use qforms_domain::traits::VocabularySource;
use qforms_extractor::{Extractor, YamlVocabulary};
use tracing::debug;

/// Load the vocabulary and compile the extractor for a configuration.
pub fn build_extractor(config: &Config) -> Result<Extractor> {
    let vocabulary = YamlVocabulary::new(&config.paths.vocabulary).load()?;
    let extractor = Extractor::new(&vocabulary, config.extractor.clone())?;
    debug!("Registry holds {} matchers", extractor.registry().len());
    Ok(extractor)
}
