//! Query term classification
//!
//! Splits a query into the words used by every later scoring step and decides
//! the role each one plays: a core technical term that must appear in the
//! content, a supporting term that earns a smaller bonus, or an ignored word.

use super::scoring::ScoringConfig;
use crate::config::ConfigError;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

/// Role a query word plays during one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryWordClass {
    /// Names a specific technology; its absence rejects the message
    CoreTech,
    /// Long, non-generic word worth a smaller bonus
    Supporting,
    /// Stop word, generic word, or too short for a bonus
    Ignored,
}

/// A query word together with its class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedWord {
    pub word: String,
    pub class: QueryWordClass,
}

/// Classifies query words against a compiled vocabulary.
#[derive(Debug, Clone)]
pub struct TermClassifier {
    core_pattern: Regex,
    stop_words: HashSet<String>,
    generic_terms: HashSet<String>,
    min_word_length: usize,
    min_supporting_length: usize,
}

impl TermClassifier {
    /// Compile a classifier from the scoring configuration.
    pub fn new(config: &ScoringConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            core_pattern: config.compile_core_pattern()?,
            stop_words: lowercase_set(&config.stop_words),
            generic_terms: lowercase_set(&config.generic_terms),
            min_word_length: config.min_word_length,
            min_supporting_length: config.min_supporting_length,
        })
    }

    /// Lowercase the query, split it on whitespace and drop words that are too short.
    pub fn query_words(&self, query: &str) -> Vec<String> {
        query
            .to_lowercase()
            .split_whitespace()
            .filter(|w| w.chars().count() >= self.min_word_length)
            .map(str::to_string)
            .collect()
    }

    /// Whether `word` is a core technical term.
    pub fn is_core_term(&self, word: &str) -> bool {
        !self.stop_words.contains(word) && self.core_pattern.is_match(word)
    }

    /// Whether `word` is a supporting term.
    pub fn is_supporting_term(&self, word: &str) -> bool {
        !self.is_core_term(word)
            && !self.stop_words.contains(word)
            && !self.generic_terms.contains(word)
            && word.chars().count() >= self.min_supporting_length
    }

    /// Classify a single (already lowercased) query word.
    pub fn classify(&self, word: &str) -> QueryWordClass {
        if self.is_core_term(word) {
            QueryWordClass::CoreTech
        } else if self.is_supporting_term(word) {
            QueryWordClass::Supporting
        } else {
            QueryWordClass::Ignored
        }
    }

    /// Tokenize and classify a whole query.
    pub fn classify_query(&self, query: &str) -> Vec<ClassifiedWord> {
        self.query_words(query)
            .into_iter()
            .map(|word| {
                let class = self.classify(&word);
                ClassifiedWord { word, class }
            })
            .collect()
    }
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> TermClassifier {
        TermClassifier::new(&ScoringConfig::default()).unwrap()
    }

    #[test]
    fn test_query_words_drop_short_words_and_lowercase() {
        let words = classifier().query_words("  How do I fix React   JS in Go ");
        assert_eq!(words, vec!["how", "fix", "react"]);
    }

    #[test]
    fn test_query_words_counts_characters_not_bytes() {
        // "né" is two characters even though it is three bytes
        assert!(classifier().query_words("né").is_empty());
        assert_eq!(classifier().query_words("café"), vec!["café"]);
    }

    #[test]
    fn test_classify() {
        let c = classifier();
        assert_eq!(c.classify("react"), QueryWordClass::CoreTech);
        assert_eq!(c.classify("typescript"), QueryWordClass::CoreTech);
        assert_eq!(c.classify("migration"), QueryWordClass::Supporting);
        assert_eq!(c.classify("hooks"), QueryWordClass::Supporting);
        // generic
        assert_eq!(c.classify("error"), QueryWordClass::Ignored);
        // stop word
        assert_eq!(c.classify("with"), QueryWordClass::Ignored);
        // too short for supporting credit
        assert_eq!(c.classify("auth"), QueryWordClass::Ignored);
    }

    #[test]
    fn test_stop_words_are_never_core() {
        let config = ScoringConfig {
            core_term_pattern: r"^[a-z]+$".to_string(),
            ..Default::default()
        };
        let c = TermClassifier::new(&config).unwrap();
        assert_eq!(c.classify("the"), QueryWordClass::Ignored);
        assert_eq!(c.classify("router"), QueryWordClass::CoreTech);
    }

    #[test]
    fn test_custom_generic_terms() {
        let config = ScoringConfig {
            generic_terms: vec!["Migration".to_string()],
            ..Default::default()
        };
        let c = TermClassifier::new(&config).unwrap();
        assert_eq!(c.classify("migration"), QueryWordClass::Ignored);
    }

    #[test]
    fn test_classify_query() {
        let classified = classifier().classify_query("React hooks for the dashboard");
        let classes: Vec<_> = classified.iter().map(|w| w.class).collect();
        assert_eq!(
            classes,
            vec![
                QueryWordClass::CoreTech,
                QueryWordClass::Supporting,
                QueryWordClass::Ignored,
                QueryWordClass::Ignored,
                QueryWordClass::Supporting,
            ]
        );
        assert_eq!(classified[0].word, "react");
    }
}
