//! Vocabulary module - surface-form alternatives per grammatical category

use std::collections::BTreeMap;

/// Category holding subject pronouns
pub const PRONOUN: &str = "pron";

/// Category holding full copula forms ("was", "is", ...)
pub const COPULA: &str = "copula";

/// Category holding contracted copulas ("she's", "I'm", ...)
pub const CONTRACTED_COPULA: &str = "contracted_copula";

/// Category holding interjections accepted as a coda
pub const INTERJECTION: &str = "intj";

/// Reserved prefix for bare quotative-verb categories
pub const QUOTATIVE_PREFIX: &str = "q_";

/// Immutable vocabulary set
///
/// Maps a category name to its ordered list of case-insensitive surface
/// forms. Keys are kept sorted so that every iteration over the set is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    categories: BTreeMap<String, Vec<String>>,
}

impl Vocabulary {
    /// Create a vocabulary from a category mapping
    pub fn new(categories: BTreeMap<String, Vec<String>>) -> Self {
        Self { categories }
    }

    /// Get the alternatives of a category, if present
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Get the alternatives of a category that a pattern template depends on
    ///
    /// # Errors
    /// Returns error if the category is absent or has no alternatives
    pub fn require(&self, category: &str) -> Result<&[String], String> {
        match self.get(category) {
            None => Err(format!("missing vocabulary category '{}'", category)),
            Some([]) => Err(format!("vocabulary category '{}' is empty", category)),
            Some(forms) => Ok(forms),
        }
    }

    /// Iterate over the bare quotative-verb categories (keys starting with `q_`)
    pub fn quotative_categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .filter(|(name, _)| name.starts_with(QUOTATIVE_PREFIX))
            .map(|(name, forms)| (name.as_str(), forms.as_slice()))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the vocabulary has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Vocabulary
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let categories = iter
            .into_iter()
            .map(|(name, forms)| (name.into(), forms.into_iter().map(Into::into).collect()))
            .collect();
        Self { categories }
    }
}
