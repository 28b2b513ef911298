//! YAML vocabulary loading

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use qforms_domain::traits::VocabularySource;
use qforms_domain::Vocabulary;
use tracing::debug;

use crate::error::{ExtractorError, Result};

/// Vocabulary stored as a YAML mapping of category → list of forms
#[derive(Debug, Clone)]
pub struct YamlVocabulary {
    path: PathBuf,
}

impl YamlVocabulary {
    /// Vocabulary backed by the YAML file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VocabularySource for YamlVocabulary {
    type Error = ExtractorError;

    fn load(&self) -> Result<Vocabulary> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            ExtractorError::Config(format!("cannot read vocabulary {}: {}", self.path.display(), e))
        })?;
        let vocabulary = vocabulary_from_yaml(&text)?;
        debug!(
            "Loaded {} vocabulary categories from {}",
            vocabulary.len(),
            self.path.display()
        );
        Ok(vocabulary)
    }
}

/// Parse a vocabulary from YAML text
pub fn vocabulary_from_yaml(yaml: &str) -> Result<Vocabulary> {
    let categories: BTreeMap<String, Vec<String>> = serde_yaml::from_str(yaml)?;
    Ok(Vocabulary::new(categories))
}
