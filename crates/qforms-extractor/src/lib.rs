//! qforms Extractor
//!
//! Finds quotative and copula constructions in tab-separated speech
//! transcripts.
//!
//! # Overview
//!
//! A YAML vocabulary of word alternatives per grammatical category is compiled
//! into one matcher per quotative subtype. Transcript lines are classified by
//! author, interviewer turns are reduced to the target speaker's overlapping
//! speech, and every matcher runs over the effective content of each line.
//!
//! # Architecture
//!
//! ```text
//! Vocabulary → PatternCompiler → MatcherRegistry
//!                                      ↓
//! Transcript → LineClassifier → OverlapResolver → Extractor → ExtractionResult
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use qforms_extractor::{vocabulary_from_yaml, Extractor, ExtractorConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let vocabulary = vocabulary_from_yaml(
//!     "pron: [she]\ncopula: [was]\ncontracted_copula: [she's]\nintj: [oh]\nq_go: [goes]\n",
//! )?;
//! let extractor = Extractor::new(&vocabulary, ExtractorConfig::default())?;
//!
//! let transcript = "Line\tSpkr\tStTime\tContent\tEnTime\n\
//!                   1\tATL_se0_1\t0.1\tshe was like, no way\t1.2\n";
//! let extraction = extractor.process_transcript("ATL_se0_1_1234", transcript)?;
//!
//! for result in &extraction.results {
//!     println!("{} {} {}", result.region_id, result.subtype, result.target);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod compiler;
mod config;
mod error;
mod extractor;
mod overlap;
mod pattern;
mod transcript;
mod types;
mod vocabulary;

#[cfg(test)]
mod tests;

pub use compiler::{MatcherRegistry, PatternCompiler};
pub use config::{
    CodaGrammar, ExtractionMode, ExtractorConfig, InterviewerPattern, MalformedLinePolicy,
    OverlapPolicy, PatternConfig, TranscriptPolicy,
};
pub use error::{ExtractorError, Result};
pub use extractor::Extractor;
pub use overlap::{OverlapResolver, Resolution, SEGMENT_DELIMITER};
pub use pattern::{
    Coda, CompiledMatcher, FormMatch, Fragment, LeftContext, MatcherBuilder, ObjectSlot,
    SubjectConstraint,
};
pub use transcript::LineClassifier;
pub use types::{ContentMatch, LineStats, TranscriptExtraction};
pub use vocabulary::{vocabulary_from_yaml, YamlVocabulary};
