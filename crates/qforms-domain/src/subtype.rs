//! Subtype module - the syntactic family a match is tagged with

use std::fmt;

use crate::vocabulary::QUOTATIVE_PREFIX;

/// Quotative marker that combines with a copula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    /// "all" ("she was all, ...")
    All,

    /// "like" ("she was like, ...")
    Like,
}

impl Marker {
    /// Both markers, in registry order
    pub const ALL: [Marker; 2] = [Marker::All, Marker::Like];

    /// The marker word as it appears in text
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::All => "all",
            Marker::Like => "like",
        }
    }
}

/// Subtype identifier bound to a compiled matcher
///
/// Closed-form families get their own constructor. Bare quotative verbs are
/// vocabulary-driven: any `q_*` category becomes a [`QuotativeSubtype::BareVerb`],
/// or a [`QuotativeSubtype::VerbWithObject`] when its key ends in `tell`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuotativeSubtype {
    /// Bare quotative verb from a `q_*` category ("she said, ...")
    BareVerb(String),

    /// Quotative verb that requires an object ("she tell him, ...")
    VerbWithObject(String),

    /// Subject + copula + marker ("she was like, ...")
    CopulaAttached(Marker),

    /// Contracted copula + marker ("she's like, ...")
    ContractedCopula(Marker),

    /// Pronoun + marker with no copula ("he all, ...")
    ZeroCopula(Marker),

    /// Pronoun + full copula, copula extraction mode
    CopulaForm,

    /// Contracted copula, copula extraction mode
    ContractedForm,
}

impl QuotativeSubtype {
    /// Build the subtype for a `q_*` vocabulary category
    ///
    /// Returns `None` when the key does not carry the quotative prefix.
    pub fn from_category(category: &str) -> Option<Self> {
        if !category.starts_with(QUOTATIVE_PREFIX) {
            return None;
        }
        if category.ends_with("tell") {
            Some(QuotativeSubtype::VerbWithObject(category.to_string()))
        } else {
            Some(QuotativeSubtype::BareVerb(category.to_string()))
        }
    }

    /// The subtype identifier written to output (`q_like_copula`, `q_tell`, ...)
    pub fn name(&self) -> String {
        match self {
            QuotativeSubtype::BareVerb(category) | QuotativeSubtype::VerbWithObject(category) => {
                category.clone()
            }
            QuotativeSubtype::CopulaAttached(marker) => format!("q_{}_copula", marker.as_str()),
            QuotativeSubtype::ContractedCopula(marker) => {
                format!("q_{}_contracted", marker.as_str())
            }
            QuotativeSubtype::ZeroCopula(marker) => format!("q_{}_zero", marker.as_str()),
            QuotativeSubtype::CopulaForm => "copula".to_string(),
            QuotativeSubtype::ContractedForm => "contracted".to_string(),
        }
    }

    /// Whether this subtype requires an object after the verb
    pub fn requires_object(&self) -> bool {
        matches!(self, QuotativeSubtype::VerbWithObject(_))
    }
}

impl fmt::Display for QuotativeSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
