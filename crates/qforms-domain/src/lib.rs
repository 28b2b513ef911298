//! qforms Domain Layer
//!
//! This crate contains the domain model for quotative and copula extraction.
//! It has ZERO external dependencies and defines the vocabulary, subtype,
//! transcript and result types that the extractor and CLI layers build on.
//!
//! ## Key Concepts
//!
//! - **Vocabulary**: word/phrase alternatives per grammatical category
//! - **Quotative subtype**: the syntactic family a match belongs to
//!   (bare verb, copula-attached, contracted, zero copula)
//! - **Transcript record**: one five-column line of a corpus transcript
//! - **Author**: whether a line belongs to the interviewer or the target speaker
//! - **Extraction result**: one matched surface form with its provenance
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and validation only
//! - Loading, matching and export live in other crates, behind the traits
//!   in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod result;
pub mod subtype;
pub mod traits;
pub mod transcript;
pub mod vocabulary;

// Re-exports for convenience
pub use result::ExtractionResult;
pub use subtype::{Marker, QuotativeSubtype};
pub use transcript::{region_id, Author, TranscriptRecord};
pub use vocabulary::Vocabulary;
