//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{ExtractionResult, Vocabulary};

/// Trait for loading a vocabulary set
///
/// Implemented by the infrastructure layer (qforms-extractor, YAML files)
pub trait VocabularySource {
    /// Error type for load operations
    type Error;

    /// Load the full vocabulary set
    fn load(&self) -> Result<Vocabulary, Self::Error>;
}

/// Trait for writing extraction results
///
/// Implemented by the infrastructure layer (qforms-cli, CSV export)
pub trait ResultSink {
    /// Error type for write operations
    type Error;

    /// Write every result, in order
    fn write_results(&mut self, results: &[ExtractionResult]) -> Result<(), Self::Error>;
}
