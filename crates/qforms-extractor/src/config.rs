//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Which family of matchers the compiler builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Quotative constructions ("she was like, ...")
    #[default]
    Quotative,
    /// Bare copula forms ("she was", "she's")
    Copula,
}

/// Grammar of the coda that must follow a quotative form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodaGrammar {
    /// Comma, dash, spaced bracket or interjection directly after the form
    Immediate,
    /// As `Immediate`, with an optional "like" before the comma
    #[default]
    LikeComma,
    /// As `LikeComma`, but a clause-internal span may precede the punctuation coda
    ///
    /// Needed for zero-copula predicates such as "he all pissed off,".
    ClauseFinal,
}

/// Which raw-line pattern marks an interviewer turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewerPattern {
    /// `<n>\t` then "Misc" or `XXX_Int_`
    #[default]
    WithMisc,
    /// `<n>\t` then `XXX_Int_` only
    InterviewerOnly,
}

impl InterviewerPattern {
    /// Regex source matched against the start of a raw transcript line
    pub fn source(&self) -> &'static str {
        match self {
            InterviewerPattern::WithMisc => r"^\d+\t(?:(?i:misc)|[A-Z]{3}_(?i:int)_)",
            InterviewerPattern::InterviewerOnly => r"^\d+\t[A-Z]{3}_(?i:int)_",
        }
    }
}

/// What an interviewer line contributes to extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Bracketed segments if any, else the interviewer content itself
    KeepContent,
    /// Bracketed segments if any, else skip the line
    #[default]
    SkipUnbracketed,
    /// Skip every interviewer line
    IgnoreInterviewer,
}

/// What to do with a line that does not have five fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedLinePolicy {
    /// Log, count and continue
    #[default]
    Skip,
    /// Fail the whole transcript
    Abort,
}

/// Switches and word lists that shape the compiled matchers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Drop the pronoun-subject requirement
    pub any_subject: bool,

    /// Omit zero-copula matchers
    pub copula_only: bool,

    /// Matcher family to build
    pub mode: ExtractionMode,

    /// Coda grammar variant
    pub coda: CodaGrammar,

    /// Reject forms directly preceded by a connective (only with `any_subject`)
    pub exclude_connectives: bool,

    /// Heads of the "like I said" idiom family
    pub idiom_heads: Vec<String>,

    /// `q_*` categories that form the idiom after a head ("like I said")
    pub idiom_verbs: Vec<String>,

    /// Discourse connectives
    pub connectives: Vec<String>,

    /// Subjects of the zero-copula construction
    pub zero_copula_subjects: Vec<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            any_subject: false,
            copula_only: false,
            mode: ExtractionMode::Quotative,
            coda: CodaGrammar::LikeComma,
            exclude_connectives: true,
            idiom_heads: words(&["like", "as", "what"]),
            idiom_verbs: words(&["q_say"]),
            connectives: words(&["so", "but", "now", "and"]),
            zero_copula_subjects: words(&["we", "she", "he", "they"]),
        }
    }
}

impl PatternConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.zero_copula_subjects.is_empty() && !self.copula_only {
            return Err("zero_copula_subjects must not be empty unless copula_only is set".to_string());
        }
        if self.exclude_connectives && self.connectives.is_empty() {
            return Err("connectives must not be empty when exclude_connectives is set".to_string());
        }
        if !self.idiom_verbs.is_empty() && self.idiom_heads.is_empty() {
            return Err("idiom_heads must not be empty when idiom_verbs is set".to_string());
        }
        let lists = [
            &self.idiom_heads,
            &self.idiom_verbs,
            &self.connectives,
            &self.zero_copula_subjects,
        ];
        if lists.iter().any(|list| list.iter().any(|w| w.trim().is_empty())) {
            return Err("word lists must not contain blank entries".to_string());
        }
        Ok(())
    }
}

/// How transcript lines are classified and resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptPolicy {
    /// Interviewer-line pattern variant
    pub interviewer: InterviewerPattern,

    /// Interviewer overlap policy
    pub overlap: OverlapPolicy,

    /// Malformed-line policy
    pub malformed: MalformedLinePolicy,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Pattern compiler settings
    pub patterns: PatternConfig,

    /// Transcript line handling
    pub transcript: TranscriptPolicy,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.patterns.validate()
    }

    /// Conservative preset: pronoun subjects, overt copula only, immediate coda
    pub fn conservative() -> Self {
        Self {
            patterns: PatternConfig {
                copula_only: true,
                coda: CodaGrammar::Immediate,
                ..PatternConfig::default()
            },
            transcript: TranscriptPolicy {
                overlap: OverlapPolicy::IgnoreInterviewer,
                ..TranscriptPolicy::default()
            },
        }
    }

    /// Permissive preset: any subject, clause-final coda, all interviewer content
    pub fn permissive() -> Self {
        Self {
            patterns: PatternConfig {
                any_subject: true,
                coda: CodaGrammar::ClauseFinal,
                ..PatternConfig::default()
            },
            transcript: TranscriptPolicy {
                overlap: OverlapPolicy::KeepContent,
                ..TranscriptPolicy::default()
            },
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}
