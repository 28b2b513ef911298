//! Result module - one extracted surface form with its provenance

use crate::subtype::QuotativeSubtype;

/// A single extraction result
///
/// One result is produced per matched surface form per subtype per line, so
/// a line can yield several results, including several of the same subtype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Source identifier (transcript file stem)
    pub source_id: String,

    /// Speaker code from the transcript line
    pub speaker_id: String,

    /// Region code derived from the source identifier
    pub region_id: String,

    /// Utterance number from the transcript line
    pub utterance_id: String,

    /// Effective utterance text the match was found in
    pub utterance: String,

    /// Subtype the matcher is bound to
    pub subtype: QuotativeSubtype,

    /// Matched surface form, original case preserved
    pub target: String,

    /// Object token for object-taking verbs
    pub object: Option<String>,
}
