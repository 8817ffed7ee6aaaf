//! Casing-aware term matching
//!
//! `react`, `React` and `REACT` are the same term; `ReAct` is a different one.
//! Content is split into tokens on whitespace and common punctuation, each
//! token is stripped down to word characters and hyphens, and a term matches
//! a token when the two are equal ignoring case *and* the token is written in
//! lowercase, uppercase or title case.
//!
//! Product names whose real spelling has interior capitals (`TypeScript`,
//! `GitHub`) can be registered as canonical spellings; a token spelled exactly
//! that way is accepted as well.

use std::collections::HashSet;

/// Punctuation that separates tokens in addition to whitespace.
const DELIMITERS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '\'', '"', '<', '>',
];

/// Term matcher with an optional set of canonical mixed-case spellings.
#[derive(Debug, Clone, Default)]
pub struct TermMatcher {
    canonical_spellings: HashSet<String>,
}

impl TermMatcher {
    /// Matcher that accepts only lowercase, uppercase and title case tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher that additionally accepts the given exact spellings.
    pub fn with_canonical_spellings<I, S>(spellings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            canonical_spellings: spellings.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `term` appears in `content` with an accepted casing.
    ///
    /// Mixed-case tokens are skipped rather than treated as a mismatch for the
    /// whole content, so `"ReAct agents, built with React"` still matches `react`.
    pub fn matches(&self, content: &str, term: &str) -> bool {
        let term = term.to_lowercase();
        if term.is_empty() {
            return false;
        }

        tokens(content).any(|token| token.to_lowercase() == term && self.accepts_casing(&token))
    }

    fn accepts_casing(&self, token: &str) -> bool {
        has_normal_casing(token) || self.canonical_spellings.contains(token)
    }
}

/// Whether `term` appears in `content` with normal casing.
pub fn matches_term(content: &str, term: &str) -> bool {
    TermMatcher::new().matches(content, term)
}

/// Split content into cleaned, non-empty tokens.
pub fn tokens(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .split(|c: char| c.is_whitespace() || DELIMITERS.contains(&c))
        .map(clean_token)
        .filter(|token| !token.is_empty())
}

fn clean_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// All lowercase, all uppercase, or an uppercase first character followed by lowercase.
pub fn has_normal_casing(token: &str) -> bool {
    if token == token.to_lowercase() || token == token.to_uppercase() {
        return true;
    }

    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str();
            first.to_uppercase().eq(std::iter::once(first)) && rest == rest.to_lowercase()
        }
        None => true,
    }
}
