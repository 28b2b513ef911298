//! Interviewer/speaker classification of raw transcript lines

use qforms_domain::Author;
use regex::Regex;

use crate::config::InterviewerPattern;
use crate::error::{ExtractorError, Result};

/// Classifies raw transcript lines by author
#[derive(Debug, Clone)]
pub struct LineClassifier {
    interviewer: Regex,
}

impl LineClassifier {
    /// Create a classifier for an interviewer pattern variant
    pub fn new(pattern: InterviewerPattern) -> Result<Self> {
        let interviewer = Regex::new(pattern.source()).map_err(|source| ExtractorError::Pattern {
            subtype: "interviewer line".to_string(),
            source,
        })?;
        Ok(Self { interviewer })
    }

    /// Classify a raw line (utterance number, tab, speaker code, ...)
    pub fn classify(&self, raw_line: &str) -> Author {
        if self.interviewer.is_match(raw_line) {
            Author::Interviewer
        } else {
            Author::Speaker
        }
    }
}
