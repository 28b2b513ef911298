//! Core Extractor implementation

use qforms_domain::{region_id, Author, ExtractionResult, TranscriptRecord, Vocabulary};
use tracing::{debug, warn};

use crate::compiler::{MatcherRegistry, PatternCompiler};
use crate::config::{ExtractorConfig, MalformedLinePolicy};
use crate::error::{ExtractorError, Result};
use crate::overlap::{OverlapResolver, Resolution};
use crate::transcript::LineClassifier;
use crate::types::{ContentMatch, LineStats, TranscriptExtraction};

/// The Extractor runs a matcher registry over transcript content
#[derive(Debug, Clone)]
pub struct Extractor {
    registry: MatcherRegistry,
    classifier: LineClassifier,
    resolver: OverlapResolver,
    config: ExtractorConfig,
}

impl Extractor {
    /// Compile the registry for a vocabulary and build an Extractor around it
    ///
    /// # Errors
    /// Fails on invalid configuration, missing or empty vocabulary categories
    /// and patterns that do not compile
    pub fn new(vocabulary: &Vocabulary, config: ExtractorConfig) -> Result<Self> {
        config.validate().map_err(ExtractorError::Config)?;
        let registry = PatternCompiler::new(vocabulary, &config.patterns).compile()?;
        Self::with_registry(registry, config)
    }

    /// Build an Extractor around an already compiled registry
    pub fn with_registry(registry: MatcherRegistry, config: ExtractorConfig) -> Result<Self> {
        Ok(Self {
            registry,
            classifier: LineClassifier::new(config.transcript.interviewer)?,
            resolver: OverlapResolver::new(config.transcript.overlap)?,
            config,
        })
    }

    /// The compiled registry
    pub fn registry(&self) -> &MatcherRegistry {
        &self.registry
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run every matcher over one piece of content
    ///
    /// Matches come in registry order, then by position.
    pub fn scan(&self, content: &str) -> Vec<ContentMatch> {
        self.registry
            .iter()
            .flat_map(|matcher| {
                matcher.find_all(content).into_iter().map(move |m| ContentMatch {
                    subtype: matcher.subtype().clone(),
                    form: m.form.to_string(),
                    object: m.object.map(str::to_string),
                    start: m.start,
                })
            })
            .collect()
    }

    /// Extract every result from the text of one transcript
    ///
    /// The first line is a header and is discarded; blank lines are ignored.
    ///
    /// # Errors
    /// Returns [`ExtractorError::MalformedLine`] under the abort policy
    pub fn process_transcript(&self, source_id: &str, text: &str) -> Result<TranscriptExtraction> {
        let mut extraction = TranscriptExtraction {
            source_id: source_id.to_string(),
            region_id: region_id(source_id),
            results: Vec::new(),
            stats: LineStats::default(),
        };

        for (index, raw_line) in text.lines().enumerate().skip(1) {
            if raw_line.trim().is_empty() {
                continue;
            }
            self.process_line(index + 1, raw_line, &mut extraction)?;
        }

        let stats = &extraction.stats;
        debug!(
            "{}: {} results, examined {}/{} lines ({} overlap, {} malformed)",
            source_id,
            extraction.results.len(),
            stats.examined_lines(),
            stats.total_lines,
            stats.overlap_lines,
            stats.malformed_lines
        );
        Ok(extraction)
    }

    fn process_line(
        &self,
        line_number: usize,
        raw_line: &str,
        extraction: &mut TranscriptExtraction,
    ) -> Result<()> {
        extraction.stats.total_lines += 1;

        let record = match TranscriptRecord::parse(raw_line) {
            Ok(record) => record,
            Err(reason) => match self.config.transcript.malformed {
                MalformedLinePolicy::Skip => {
                    warn!("{}: skipping line {}: {}", extraction.source_id, line_number, reason);
                    extraction.stats.malformed_lines += 1;
                    return Ok(());
                }
                MalformedLinePolicy::Abort => {
                    return Err(ExtractorError::MalformedLine {
                        line: line_number,
                        reason,
                    });
                }
            },
        };

        let author = self.classifier.classify(raw_line);
        match author {
            Author::Interviewer => extraction.stats.interviewer_lines += 1,
            Author::Speaker => extraction.stats.speaker_lines += 1,
        }

        let resolution = self.resolver.resolve(author, &record.content);
        if matches!(resolution, Resolution::Overlap(_)) {
            extraction.stats.overlap_lines += 1;
        }
        let Some(content) = resolution.content() else {
            extraction.stats.skipped_lines += 1;
            return Ok(());
        };

        let matches = self.scan(&content);
        if matches.is_empty() {
            return Ok(());
        }
        extraction.stats.matched_lines += 1;

        for found in matches {
            extraction.results.push(ExtractionResult {
                source_id: extraction.source_id.clone(),
                speaker_id: record.speaker_id.clone(),
                region_id: extraction.region_id.clone(),
                utterance_id: record.utterance_id.clone(),
                utterance: content.to_string(),
                subtype: found.subtype,
                target: found.form,
                object: found.object,
            });
        }
        Ok(())
    }
}
