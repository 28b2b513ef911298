//! Interviewer overlap resolution
//!
//! Target-speaker speech that overlaps an interviewer turn is transcribed
//! inline in square brackets: `well [I said stop] okay`.

use std::borrow::Cow;

use qforms_domain::Author;
use regex::Regex;

use crate::config::OverlapPolicy;
use crate::error::{ExtractorError, Result};

/// Delimiter between overlap segments in the effective content
pub const SEGMENT_DELIMITER: &str = "|";

/// Effective content of a line after overlap resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Line content as transcribed
    Content(&'a str),
    /// Bracketed overlap segments joined by `|`
    Overlap(String),
    /// Line contributes nothing
    Skip,
}

impl<'a> Resolution<'a> {
    /// Effective content, if the line contributes any
    pub fn content(&self) -> Option<Cow<'a, str>> {
        match self {
            Resolution::Content(content) => Some(Cow::Borrowed(*content)),
            Resolution::Overlap(segments) => Some(Cow::Owned(segments.clone())),
            Resolution::Skip => None,
        }
    }
}

/// Replaces interviewer content with embedded target-speaker segments
#[derive(Debug, Clone)]
pub struct OverlapResolver {
    brackets: Regex,
    policy: OverlapPolicy,
}

impl OverlapResolver {
    /// Create a resolver for an overlap policy
    pub fn new(policy: OverlapPolicy) -> Result<Self> {
        let brackets = Regex::new(r"\[([^\[\]]*)\]").map_err(|source| ExtractorError::Pattern {
            subtype: "overlap brackets".to_string(),
            source,
        })?;
        Ok(Self { brackets, policy })
    }

    /// Bracketed segments of `content`, brackets stripped, blanks dropped
    pub fn segments<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.brackets
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Resolve the effective content of a line
    pub fn resolve<'a>(&self, author: Author, content: &'a str) -> Resolution<'a> {
        if author == Author::Speaker {
            return Resolution::Content(content);
        }
        if self.policy == OverlapPolicy::IgnoreInterviewer {
            return Resolution::Skip;
        }

        let segments = self.segments(content);
        if !segments.is_empty() {
            return Resolution::Overlap(segments.join(SEGMENT_DELIMITER));
        }

        match self.policy {
            OverlapPolicy::KeepContent => Resolution::Content(content),
            OverlapPolicy::SkipUnbracketed | OverlapPolicy::IgnoreInterviewer => Resolution::Skip,
        }
    }
}
