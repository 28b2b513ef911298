//! Error types for the Extractor

use thiserror::Error;

/// Result type alias for extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Errors that can occur while building matchers or extracting forms
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Vocabulary category missing or empty
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Two matchers would share one subtype identifier
    #[error("Duplicate subtype '{0}'")]
    DuplicateSubtype(String),

    /// A composed pattern failed to compile
    #[error("Pattern error for '{subtype}': {source}")]
    Pattern {
        /// Subtype (or fragment) the pattern was built for
        subtype: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Transcript line without exactly five fields
    #[error("Malformed transcript line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number within the transcript
        line: usize,
        /// Why the line was rejected
        reason: String,
    },

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for ExtractorError {
    fn from(e: serde_yaml::Error) -> Self {
        ExtractorError::YamlParse(e.to_string())
    }
}
