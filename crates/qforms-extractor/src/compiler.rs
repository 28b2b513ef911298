//! Pattern compiler: vocabulary + switches → matcher registry

use std::collections::BTreeMap;

use qforms_domain::vocabulary::{CONTRACTED_COPULA, COPULA, INTERJECTION, PRONOUN};
use qforms_domain::{Marker, QuotativeSubtype, Vocabulary};
use tracing::debug;

use crate::config::{ExtractionMode, PatternConfig};
use crate::error::{ExtractorError, Result};
use crate::pattern::{
    Coda, CompiledMatcher, Fragment, LeftContext, MatcherBuilder, ObjectSlot, SubjectConstraint,
};

/// Objects that turn an object-taking verb into an idiom ("tell you")
const EXCLUDED_OBJECTS: [&str; 1] = ["you"];

/// Ordered mapping from subtype identifier to compiled matcher
#[derive(Debug, Clone, Default)]
pub struct MatcherRegistry {
    matchers: BTreeMap<String, CompiledMatcher>,
}

impl MatcherRegistry {
    /// Add a matcher, rejecting duplicate subtype identifiers
    fn insert(&mut self, matcher: CompiledMatcher) -> Result<()> {
        let name = matcher.subtype().name();
        if self.matchers.contains_key(&name) {
            return Err(ExtractorError::DuplicateSubtype(name));
        }
        debug!("Compiled {}: {}", name, matcher.pattern());
        self.matchers.insert(name, matcher);
        Ok(())
    }

    /// Look up a matcher by subtype identifier
    pub fn get(&self, subtype: &str) -> Option<&CompiledMatcher> {
        self.matchers.get(subtype)
    }

    /// Iterate matchers in subtype-identifier order
    pub fn iter(&self) -> impl Iterator<Item = &CompiledMatcher> {
        self.matchers.values()
    }

    /// Subtype identifiers in registry order
    pub fn subtypes(&self) -> impl Iterator<Item = &str> {
        self.matchers.keys().map(String::as_str)
    }

    /// Number of matchers
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

/// Builds a [`MatcherRegistry`] from a vocabulary and pattern switches
pub struct PatternCompiler<'a> {
    vocabulary: &'a Vocabulary,
    config: &'a PatternConfig,
}

impl<'a> PatternCompiler<'a> {
    /// Create a compiler over a vocabulary
    pub fn new(vocabulary: &'a Vocabulary, config: &'a PatternConfig) -> Self {
        Self { vocabulary, config }
    }

    /// Compile the registry for the configured mode
    ///
    /// # Errors
    /// Fails before building anything if a required category is absent or
    /// empty, and on duplicate subtype identifiers
    pub fn compile(&self) -> Result<MatcherRegistry> {
        self.config.validate().map_err(ExtractorError::Config)?;

        let registry = match self.config.mode {
            ExtractionMode::Quotative => self.compile_quotatives()?,
            ExtractionMode::Copula => self.compile_copulas()?,
        };

        debug!(
            "Compiled {} matchers (any_subject={}, copula_only={}, mode={:?})",
            registry.len(),
            self.config.any_subject,
            self.config.copula_only,
            self.config.mode
        );
        Ok(registry)
    }

    fn compile_quotatives(&self) -> Result<MatcherRegistry> {
        let pronouns = self.require(PRONOUN)?;
        let copulas = self.require(COPULA)?;
        let contracted = self.require(CONTRACTED_COPULA)?;
        let interjections = self.require(INTERJECTION)?;

        let coda = Coda::new(self.config.coda, interjections);
        let subject = if self.config.any_subject {
            SubjectConstraint::Unrestricted
        } else {
            SubjectConstraint::pronouns(pronouns)
        };
        let subject_context = self.subject_left_context()?;

        let mut registry = MatcherRegistry::default();

        for (category, forms) in self.vocabulary.quotative_categories() {
            let Some(subtype) = QuotativeSubtype::from_category(category) else {
                continue;
            };
            if forms.is_empty() {
                return Err(ExtractorError::Vocabulary(format!(
                    "vocabulary category '{}' is empty",
                    category
                )));
            }

            let left_context = if self.config.idiom_verbs.iter().any(|v| v == category) {
                self.idiom_left_context(subject_context.clone())?
            } else {
                subject_context.clone()
            };
            let mut builder = MatcherBuilder::new(subtype.clone())
                .subject(subject.clone())
                .form(Fragment::alternatives(forms))
                .left_context(left_context);
            if subtype.requires_object() {
                builder = builder.object(ObjectSlot::excluding(&EXCLUDED_OBJECTS));
            }
            registry.insert(builder.coda(coda.clone()).build()?)?;
        }

        for marker in Marker::ALL {
            let marker_word = Fragment::raw(r"\s+").then(Fragment::literal(marker.as_str()));

            registry.insert(
                MatcherBuilder::new(QuotativeSubtype::CopulaAttached(marker))
                    .subject(subject.clone())
                    .form(Fragment::alternatives(copulas).then(marker_word.clone()))
                    .coda(coda.clone())
                    .left_context(subject_context.clone())
                    .build()?,
            )?;

            registry.insert(
                MatcherBuilder::new(QuotativeSubtype::ContractedCopula(marker))
                    .form(Fragment::alternatives(contracted).then(marker_word))
                    .coda(coda.clone())
                    .build()?,
            )?;

            if !self.config.copula_only {
                registry.insert(
                    MatcherBuilder::new(QuotativeSubtype::ZeroCopula(marker))
                        .subject(SubjectConstraint::pronouns(&self.config.zero_copula_subjects))
                        .form(Fragment::literal(marker.as_str()))
                        .coda(coda.clone())
                        .build()?,
                )?;
            }
        }

        Ok(registry)
    }

    fn compile_copulas(&self) -> Result<MatcherRegistry> {
        let pronouns = self.require(PRONOUN)?;
        let copulas = self.require(COPULA)?;
        let contracted = self.require(CONTRACTED_COPULA)?;

        let subject = if self.config.any_subject {
            SubjectConstraint::Unrestricted
        } else {
            SubjectConstraint::pronouns(pronouns)
        };

        let mut registry = MatcherRegistry::default();
        registry.insert(
            MatcherBuilder::new(QuotativeSubtype::CopulaForm)
                .subject(subject)
                .form(Fragment::alternatives(copulas))
                .build()?,
        )?;
        registry.insert(
            MatcherBuilder::new(QuotativeSubtype::ContractedForm)
                .form(Fragment::alternatives(contracted))
                .build()?,
        )?;
        Ok(registry)
    }

    /// Vetoes for matchers that carry the configurable subject constraint
    ///
    /// Only an unrestricted subject can be a connective ("and was like, ...").
    fn subject_left_context(&self) -> Result<LeftContext> {
        let context = LeftContext::none();
        if self.config.any_subject && self.config.exclude_connectives {
            context.immediately_after(&self.config.connectives, "connectives")
        } else {
            Ok(context)
        }
    }

    /// Adds the "like I said" veto for an idiom-forming verb
    ///
    /// A pronoun match starts at the subject, so the head sits directly before
    /// it; an unrestricted match starts at the verb, one word after the head.
    fn idiom_left_context(&self, context: LeftContext) -> Result<LeftContext> {
        if self.config.any_subject {
            context.one_word_after(&self.config.idiom_heads, "idioms")
        } else {
            context.immediately_after(&self.config.idiom_heads, "idioms")
        }
    }

    fn require(&self, category: &str) -> Result<&'a [String]> {
        self.vocabulary
            .require(category)
            .map_err(ExtractorError::Vocabulary)
    }
}
