//! Transcript module - one line of a tab-separated corpus transcript

/// Number of tab-separated fields on every transcript line
pub const FIELD_COUNT: usize = 5;

/// Number of leading characters of a source identifier that form its region code
pub const REGION_CODE_LEN: usize = 3;

/// Who produced a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Author {
    /// Interviewer (or miscellaneous non-target) turn
    Interviewer,

    /// Target speaker turn
    Speaker,
}

/// A parsed transcript line
///
/// Column layout: `utt_id, speaker_id, start, content, end`. The two time
/// columns are not used by extraction but are kept so a record always
/// accounts for all five fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRecord {
    /// Utterance number within the transcript
    pub utterance_id: String,

    /// Speaker code of the turn
    pub speaker_id: String,

    /// Start time column (unused)
    pub start_time: String,

    /// Transcribed speech, possibly with bracketed overlap segments
    pub content: String,

    /// End time column (unused)
    pub end_time: String,
}

impl TranscriptRecord {
    /// Parse one raw transcript line
    ///
    /// Trailing line terminators are stripped before splitting.
    ///
    /// # Errors
    /// Returns error if the line does not have exactly five tab-separated fields
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(format!(
                "expected {} tab-separated fields, found {}",
                FIELD_COUNT,
                fields.len()
            ));
        }

        Ok(Self {
            utterance_id: fields[0].to_string(),
            speaker_id: fields[1].to_string(),
            start_time: fields[2].to_string(),
            content: fields[3].to_string(),
            end_time: fields[4].to_string(),
        })
    }
}

/// Derive the region code from a source identifier
///
/// The region is the first three characters of the identifier
/// (`ATL_se0_1_1234` → `ATL`). Shorter identifiers are returned whole.
pub fn region_id(source_id: &str) -> String {
    source_id.chars().take(REGION_CODE_LEN).collect()
}
