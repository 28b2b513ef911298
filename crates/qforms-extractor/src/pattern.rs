//! Matcher combinators
//!
//! A matcher is assembled from typed fragments instead of ad-hoc string
//! splicing:
//!
//! ```text
//! subject constraint → (?P<form> form ) → form boundary → [object slot] → [coda]
//! ```
//!
//! plus a [`LeftContext`] that vetoes candidates by the text preceding them,
//! since the regex engine has no look-behind.

use std::fmt;

use qforms_domain::QuotativeSubtype;
use regex::{Captures, Regex};

use crate::config::CodaGrammar;
use crate::error::{ExtractorError, Result};

/// Left edge: the previous character is not a word character
const START_BOUNDARY: &str = r"\b{start-half}";

/// Right edge: the next character is not a word character
const END_BOUNDARY: &str = r"\b{end-half}";

/// Characters a clause-internal span may not cross
const CLAUSE_SPAN: &str = r"(?:\s+[^,\[\](/|\-]*?)?";

/// A composable regex fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// Wrap trusted regex source
    pub(crate) fn raw(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Escaped literal; internal whitespace runs match any whitespace run
    pub fn literal(text: &str) -> Self {
        let parts: Vec<String> = text.split_whitespace().map(regex::escape).collect();
        Self(parts.join(r"\s+"))
    }

    /// Alternation over escaped literals, longest first
    ///
    /// Blank entries are ignored. An empty list yields a fragment that never
    /// matches.
    pub fn alternatives<S: AsRef<str>>(words: &[S]) -> Self {
        let mut forms: Vec<&str> = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect();
        if forms.is_empty() {
            return Self(r"[^\s\S]".to_string());
        }
        forms.sort_by(|a, b| b.len().cmp(&a.len()));
        let branches: Vec<String> = forms.iter().map(|w| Fragment::literal(w).0).collect();
        Self(format!("(?:{})", branches.join("|")))
    }

    /// Named capture group around a fragment
    pub fn capture(name: &str, inner: Fragment) -> Self {
        Self(format!("(?P<{}>{})", name, inner.0))
    }

    /// Append another fragment
    pub fn then(mut self, next: Fragment) -> Self {
        self.0.push_str(&next.0);
        self
    }

}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What may precede the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectConstraint {
    /// A subject drawn from the given alternatives, directly adjacent
    Pronoun(Fragment),
    /// No subject requirement, only a left word boundary
    Unrestricted,
}

impl SubjectConstraint {
    /// Pronoun constraint over vocabulary alternatives
    pub fn pronouns<S: AsRef<str>>(words: &[S]) -> Self {
        SubjectConstraint::Pronoun(Fragment::alternatives(words))
    }

    /// Regex fragment for this constraint
    pub fn fragment(&self) -> Fragment {
        match self {
            SubjectConstraint::Pronoun(pronouns) => Fragment::raw(START_BOUNDARY)
                .then(Fragment::capture("subject", pronouns.clone()))
                .then(Fragment::raw(r"\s+")),
            SubjectConstraint::Unrestricted => Fragment::raw(START_BOUNDARY),
        }
    }
}

/// Object token required after an object-taking verb
///
/// The object is the first token after the verb; the rest of its clause may
/// follow before the coda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSlot {
    excluded: Vec<String>,
}

impl ObjectSlot {
    /// Object slot rejecting the given objects (case-insensitive)
    pub fn excluding<S: AsRef<str>>(objects: &[S]) -> Self {
        Self {
            excluded: objects.iter().map(|o| o.as_ref().to_string()).collect(),
        }
    }

    /// Regex fragment for this slot
    pub fn fragment(&self) -> Fragment {
        Fragment::raw(r"\s+")
            .then(Fragment::capture("object", Fragment::raw(r"[^\s,\[\](/|]+")))
            .then(Fragment::raw(CLAUSE_SPAN))
    }

    fn rejects(&self, object: &str) -> bool {
        self.excluded.iter().any(|o| o.eq_ignore_ascii_case(object))
    }
}

/// Boundary material that must follow a quotative form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coda {
    grammar: CodaGrammar,
    interjections: Fragment,
}

impl Coda {
    /// Coda over the given interjections
    pub fn new<S: AsRef<str>>(grammar: CodaGrammar, interjections: &[S]) -> Self {
        Self {
            grammar,
            interjections: Fragment::alternatives(interjections),
        }
    }

    /// Regex fragment for this coda
    pub fn fragment(&self) -> Fragment {
        let comma = match self.grammar {
            CodaGrammar::Immediate => ",",
            CodaGrammar::LikeComma | CodaGrammar::ClauseFinal => r"(?:\s+like)?,",
        };
        let punctuation = format!(r"(?:{}|\s?-(?:-|\s|$)|\s[\[(/])", comma);
        let interjection = format!(r"\s+{}{}", self.interjections, END_BOUNDARY);
        let span = match self.grammar {
            CodaGrammar::ClauseFinal => CLAUSE_SPAN,
            CodaGrammar::Immediate | CodaGrammar::LikeComma => "",
        };
        Fragment::raw(format!("(?:{}{}|{})", span, punctuation, interjection))
    }
}

/// Vetoes on the text preceding a candidate match
///
/// Each rule is anchored at the end of the preceding text; a candidate is
/// rejected when any rule matches.
#[derive(Debug, Clone, Default)]
pub struct LeftContext {
    rules: Vec<Regex>,
}

impl LeftContext {
    /// No vetoes
    pub fn none() -> Self {
        Self::default()
    }

    /// Reject a candidate directly preceded by one of `words`
    pub fn immediately_after<S: AsRef<str>>(mut self, words: &[S], name: &str) -> Result<Self> {
        let words = Fragment::alternatives(words);
        self.push(format!(r"(?i){}{}\s+$", START_BOUNDARY, words), name)?;
        Ok(self)
    }

    /// Reject a candidate preceded by one of `words` and exactly one more word
    pub fn one_word_after<S: AsRef<str>>(mut self, words: &[S], name: &str) -> Result<Self> {
        let words = Fragment::alternatives(words);
        self.push(format!(r"(?i){}{}\s+\S+\s+$", START_BOUNDARY, words), name)?;
        Ok(self)
    }

    /// Whether the text before a candidate vetoes it
    pub fn rejects(&self, preceding: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(preceding))
    }

    fn push(&mut self, source: String, name: &str) -> Result<()> {
        let rule = Regex::new(&source).map_err(|source| ExtractorError::Pattern {
            subtype: format!("left context ({})", name),
            source,
        })?;
        self.rules.push(rule);
        Ok(())
    }
}

/// One accepted match of a compiled matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMatch<'t> {
    /// Text of the form group, original case
    pub form: &'t str,
    /// Object token, for object-taking verbs
    pub object: Option<&'t str>,
    /// Byte offset where the whole match starts
    pub start: usize,
    /// Byte offset where the whole match ends
    pub end: usize,
}

/// Joins fragments into a [`CompiledMatcher`]
#[derive(Debug, Clone)]
pub struct MatcherBuilder {
    subtype: QuotativeSubtype,
    subject: SubjectConstraint,
    form: Option<Fragment>,
    object: Option<ObjectSlot>,
    coda: Option<Coda>,
    left_context: LeftContext,
}

impl MatcherBuilder {
    /// Start a matcher for a subtype
    pub fn new(subtype: QuotativeSubtype) -> Self {
        Self {
            subtype,
            subject: SubjectConstraint::Unrestricted,
            form: None,
            object: None,
            coda: None,
            left_context: LeftContext::none(),
        }
    }

    /// Set the subject constraint
    pub fn subject(mut self, subject: SubjectConstraint) -> Self {
        self.subject = subject;
        self
    }

    /// Set the form fragment (captured as the surface form)
    pub fn form(mut self, form: Fragment) -> Self {
        self.form = Some(form);
        self
    }

    /// Require an object after the form
    pub fn object(mut self, object: ObjectSlot) -> Self {
        self.object = Some(object);
        self
    }

    /// Require a coda after the form
    pub fn coda(mut self, coda: Coda) -> Self {
        self.coda = Some(coda);
        self
    }

    /// Set the left-context vetoes
    pub fn left_context(mut self, left_context: LeftContext) -> Self {
        self.left_context = left_context;
        self
    }

    /// Regex source of the composed matcher
    pub fn source(&self) -> Result<String> {
        let form = self.form.clone().ok_or_else(|| {
            ExtractorError::Config(format!("matcher '{}' has no form", self.subtype))
        })?;

        let mut pattern = Fragment::raw("(?i)")
            .then(self.subject.fragment())
            .then(Fragment::capture("form", form))
            .then(Fragment::raw(END_BOUNDARY));
        if let Some(object) = &self.object {
            pattern = pattern.then(object.fragment());
        }
        if let Some(coda) = &self.coda {
            pattern = pattern.then(coda.fragment());
        }
        Ok(pattern.0)
    }

    /// Compile the matcher
    pub fn build(self) -> Result<CompiledMatcher> {
        let source = self.source()?;
        let regex = Regex::new(&source).map_err(|source| ExtractorError::Pattern {
            subtype: self.subtype.name(),
            source,
        })?;
        Ok(CompiledMatcher {
            subtype: self.subtype,
            regex,
            object: self.object,
            left_context: self.left_context,
        })
    }
}

/// Stateless, reusable matcher bound to one subtype
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    subtype: QuotativeSubtype,
    regex: Regex,
    object: Option<ObjectSlot>,
    left_context: LeftContext,
}

impl CompiledMatcher {
    /// Subtype this matcher is bound to
    pub fn subtype(&self) -> &QuotativeSubtype {
        &self.subtype
    }

    /// Regex source of the matcher
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Find all non-overlapping accepted matches in `content`
    ///
    /// A candidate vetoed by its left context or object does not consume its
    /// span; scanning resumes one character after its start.
    pub fn find_all<'t>(&self, content: &'t str) -> Vec<FormMatch<'t>> {
        let mut found = Vec::new();
        let mut pos = 0;

        while pos <= content.len() {
            let Some(caps) = self.regex.captures_at(content, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            match self.accept(content, whole.start(), &caps) {
                Some(matched) => {
                    found.push(FormMatch {
                        end: whole.end(),
                        ..matched
                    });
                    pos = if whole.end() > whole.start() {
                        whole.end()
                    } else {
                        next_char(content, whole.end())
                    };
                }
                None => pos = next_char(content, whole.start()),
            }
        }

        found
    }

    fn accept<'t>(&self, content: &'t str, start: usize, caps: &Captures<'t>) -> Option<FormMatch<'t>> {
        let form = caps.name("form")?.as_str();
        let object = caps.name("object").map(|m| m.as_str());

        if let (Some(slot), Some(object)) = (&self.object, object) {
            if slot.rejects(object) {
                return None;
            }
        }
        if self.left_context.rejects(&content[..start]) {
            return None;
        }

        Some(FormMatch {
            form,
            object,
            start,
            end: start,
        })
    }
}

fn next_char(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| at + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchored(fragment: &Fragment) -> Regex {
        Regex::new(&format!("(?i)^{}", fragment)).unwrap()
    }

    #[test]
    fn test_literal_escapes_and_normalizes_space() {
        assert_eq!(Fragment::literal("a.b").to_string(), r"a\.b");
        assert_eq!(Fragment::literal("you  know").to_string(), r"you\s+know");
    }

    #[test]
    fn test_alternatives_longest_first() {
        let alts = Fragment::alternatives(&["is", "was", "", "be"]);
        assert_eq!(alts.to_string(), "(?:was|is|be)");
    }

    #[test]
    fn test_empty_alternatives_never_match() {
        let alts = Fragment::alternatives::<&str>(&[]);
        assert!(!anchored(&alts).is_match("anything"));
        assert!(!anchored(&alts).is_match(""));
    }

    #[test]
    fn test_capture_then() {
        let frag = Fragment::capture("x", Fragment::literal("a")).then(Fragment::literal("b"));
        assert_eq!(frag.to_string(), "(?P<x>a)b");
    }

    #[test]
    fn test_pronoun_subject_requires_adjacency() {
        let subject = SubjectConstraint::pronouns(&["she"]).fragment();
        let regex = anchored(&subject.then(Fragment::literal("said")));
        assert!(regex.is_match("she said"));
        assert!(regex.is_match("SHE  said"));
        assert!(!regex.is_match("she then said"));
    }

    #[test]
    fn test_immediate_coda() {
        let coda = anchored(&Coda::new(CodaGrammar::Immediate, &["oh", "man"]).fragment());
        assert!(coda.is_match(", no way"));
        assert!(coda.is_match(","));
        assert!(coda.is_match(" - no"));
        assert!(coda.is_match("-- no"));
        assert!(coda.is_match(" [laugh]"));
        assert!(coda.is_match(" (pause)"));
        assert!(coda.is_match(" /inaudible/"));
        assert!(coda.is_match(" oh my god"));
        assert!(!coda.is_match(" ohio"));
        assert!(!coda.is_match("-minded"));
        assert!(!coda.is_match(" like,"));
        assert!(!coda.is_match(""));
    }

    #[test]
    fn test_like_comma_coda() {
        let coda = anchored(&Coda::new(CodaGrammar::LikeComma, &["oh"]).fragment());
        assert!(coda.is_match(" like, what"));
        assert!(!coda.is_match(" the best,"));
    }

    #[test]
    fn test_clause_final_coda() {
        let coda = anchored(&Coda::new(CodaGrammar::ClauseFinal, &["oh"]).fragment());
        assert!(coda.is_match(" pissed off,"));
        assert!(coda.is_match(" pissed off [laugh]"));
        assert!(!coda.is_match(" pissed off"));
        assert!(!coda.is_match(" pissed-off guy"));
    }

    #[test]
    fn test_left_context_immediately_after() {
        let left = LeftContext::none()
            .immediately_after(&["so", "and"], "connectives")
            .unwrap();
        assert!(left.rejects("and "));
        assert!(left.rejects("well, So  "));
        assert!(!left.rejects("and she "));
        assert!(!left.rejects("band "));
        assert!(!left.rejects(""));
        assert!(!LeftContext::none().rejects("and "));
    }

    #[test]
    fn test_left_context_one_word_after() {
        let left = LeftContext::none()
            .one_word_after(&["like", "as", "what"], "idioms")
            .unwrap();
        assert!(left.rejects("like I "));
        assert!(left.rejects("well, As she "));
        assert!(!left.rejects("like "));
        assert!(!left.rejects("unlike I "));
        assert!(!left.rejects("like you know "));
    }

    #[test]
    fn test_builder_requires_form() {
        let result = MatcherBuilder::new(QuotativeSubtype::CopulaForm).build();
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_matcher_captures_form_only() {
        let matcher = MatcherBuilder::new(QuotativeSubtype::BareVerb("q_go".to_string()))
            .subject(SubjectConstraint::pronouns(&["he"]))
            .form(Fragment::alternatives(&["goes", "go"]))
            .coda(Coda::new(CodaGrammar::Immediate, &["oh"]))
            .build()
            .unwrap();

        let found = matcher.find_all("and he goes, no and he GOES oh");
        let forms: Vec<_> = found.iter().map(|m| m.form).collect();
        assert_eq!(forms, ["goes", "GOES"]);
        assert!(matcher.find_all("he goesto,").is_empty());
    }

    #[test]
    fn test_vetoed_candidate_does_not_hide_later_match() {
        let matcher = MatcherBuilder::new(QuotativeSubtype::BareVerb("q_say".to_string()))
            .subject(SubjectConstraint::pronouns(&["I", "she"]))
            .form(Fragment::literal("said"))
            .coda(Coda::new(CodaGrammar::Immediate, &["oh"]))
            .left_context(LeftContext::none().immediately_after(&["like"], "idioms").unwrap())
            .build()
            .unwrap();

        assert!(matcher.find_all("like I said, it was fine").is_empty());
        let found = matcher.find_all("like I said, she said, stop");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].form, "said");
        assert_eq!(&"like I said, she said, stop"[found[0].start..found[0].end], "she said,");
    }

    #[test]
    fn test_object_slot_rejects_excluded_object() {
        let matcher = MatcherBuilder::new(QuotativeSubtype::VerbWithObject("q_tell".to_string()))
            .subject(SubjectConstraint::pronouns(&["she"]))
            .form(Fragment::literal("tell"))
            .object(ObjectSlot::excluding(&["you"]))
            .coda(Coda::new(CodaGrammar::Immediate, &["oh"]))
            .build()
            .unwrap();

        assert!(matcher.find_all("she tell YOU the truth,").is_empty());
        let found = matcher.find_all("she tell him the truth,");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].object, Some("him"));
    }
}
