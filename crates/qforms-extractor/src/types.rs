//! Result and statistics types for extraction

use std::ops::AddAssign;

use qforms_domain::{ExtractionResult, QuotativeSubtype};

/// One match found in a piece of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMatch {
    /// Subtype of the matcher that fired
    pub subtype: QuotativeSubtype,

    /// Matched surface form, original case
    pub form: String,

    /// Object token for object-taking verbs
    pub object: Option<String>,

    /// Byte offset of the whole match in the content
    pub start: usize,
}

/// Line counters for one or more transcripts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    /// Data lines seen (header and blank lines excluded)
    pub total_lines: usize,

    /// Lines authored by the target speaker
    pub speaker_lines: usize,

    /// Lines authored by the interviewer
    pub interviewer_lines: usize,

    /// Interviewer lines replaced by their overlap segments
    pub overlap_lines: usize,

    /// Lines that contributed no content
    pub skipped_lines: usize,

    /// Lines without five fields
    pub malformed_lines: usize,

    /// Lines with at least one match
    pub matched_lines: usize,
}

impl LineStats {
    /// Lines whose content was run through the matchers
    pub fn examined_lines(&self) -> usize {
        self.speaker_lines + self.interviewer_lines - self.skipped_lines
    }
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.total_lines += other.total_lines;
        self.speaker_lines += other.speaker_lines;
        self.interviewer_lines += other.interviewer_lines;
        self.overlap_lines += other.overlap_lines;
        self.skipped_lines += other.skipped_lines;
        self.malformed_lines += other.malformed_lines;
        self.matched_lines += other.matched_lines;
    }
}

/// Everything extracted from one transcript
#[derive(Debug, Clone)]
pub struct TranscriptExtraction {
    /// Source identifier of the transcript
    pub source_id: String,

    /// Region code derived from the source identifier
    pub region_id: String,

    /// Results in line order, then registry order, then position
    pub results: Vec<ExtractionResult>,

    /// Line counters
    pub stats: LineStats,
}
