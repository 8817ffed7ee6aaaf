//! Relevance score calculation
//!
//! Combines the core-term gate, supporting-term credit and the context
//! bonuses into a single non-negative integer per message.

use super::matcher::TermMatcher;
use super::scoring::ScoringConfig;
use super::terms::TermClassifier;
use crate::config::ConfigError;
use crate::models::ConversationEntry;
use serde::Serialize;

/// Outcome of the core-term gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "points", rename_all = "snake_case")]
pub enum CoreGate {
    /// The query names a technology the message never mentions
    Rejected,
    /// Points earned by term, phrase and majority matching
    Scored(u32),
}

/// Per-component view of one message's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub gate: CoreGate,
    pub supporting: u32,
    pub tool_usage: u32,
    pub file_reference: u32,
    pub project_match: u32,
}

impl ScoreBreakdown {
    fn rejected() -> Self {
        Self {
            gate: CoreGate::Rejected,
            supporting: 0,
            tool_usage: 0,
            file_reference: 0,
            project_match: 0,
        }
    }

    /// Whether the core-term gate rejected the message.
    pub fn is_rejected(&self) -> bool {
        self.gate == CoreGate::Rejected
    }

    /// Final score: zero when rejected, otherwise the sum of every component.
    pub fn total(&self) -> u32 {
        match self.gate {
            CoreGate::Rejected => 0,
            CoreGate::Scored(points) => points
                .saturating_add(self.supporting)
                .saturating_add(self.tool_usage)
                .saturating_add(self.file_reference)
                .saturating_add(self.project_match),
        }
    }
}

/// Scores conversation entries against a query.
///
/// Construction compiles the configuration once; scoring itself is pure and
/// can be shared freely across threads.
///
/// # Example
///
/// ```
/// use scrollback::models::ConversationEntry;
/// use scrollback::search::{RelevanceScorer, ScoringConfig};
///
/// let scorer = RelevanceScorer::new(&ScoringConfig::default()).unwrap();
/// let entry = ConversationEntry::text("user", "How do React hooks work?");
///
/// assert!(scorer.score(&entry, "react hooks", None) > 0);
/// assert_eq!(scorer.score(&entry, "vue hooks", None), 0);
/// ```
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    config: ScoringConfig,
    classifier: TermClassifier,
    matcher: TermMatcher,
}

impl RelevanceScorer {
    /// Create a scorer, validating the configuration first.
    pub fn new(config: &ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            classifier: TermClassifier::new(config)?,
            matcher: TermMatcher::with_canonical_spellings(config.canonical_spellings.clone()),
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn classifier(&self) -> &TermClassifier {
        &self.classifier
    }

    /// Score `entry` against `query`, optionally crediting messages written
    /// inside `project`.
    pub fn score(&self, entry: &ConversationEntry, query: &str, project: Option<&str>) -> u32 {
        self.explain(entry, query, project).total()
    }

    /// Score `entry` and report how each component contributed.
    pub fn explain(
        &self,
        entry: &ConversationEntry,
        query: &str,
        project: Option<&str>,
    ) -> ScoreBreakdown {
        let content = entry.content();
        let words = self.classifier.query_words(query);

        let gate = self.evaluate_core_gate(&content, query, &words);
        if gate == CoreGate::Rejected {
            return ScoreBreakdown::rejected();
        }

        ScoreBreakdown {
            gate,
            supporting: self.score_supporting(&content, &words),
            tool_usage: self.tool_usage_bonus(entry),
            file_reference: self.file_reference_bonus(&content),
            project_match: self.project_match_bonus(entry, project),
        }
    }

    /// Run core-term matching and the word, phrase and majority checks.
    pub fn evaluate_core_gate(&self, content: &str, query: &str, words: &[String]) -> CoreGate {
        let (core, other): (Vec<&String>, Vec<&String>) = words
            .iter()
            .partition(|word| self.classifier.is_core_term(word));

        let core_matches = core
            .iter()
            .filter(|term| self.matcher.matches(content, term))
            .count();

        if !core.is_empty() && core_matches == 0 {
            return CoreGate::Rejected;
        }

        let mut points = self
            .config
            .exact_match_score
            .saturating_mul(u32::try_from(core_matches).unwrap_or(u32::MAX));
        let mut matched = core_matches;

        for word in other {
            if self.matcher.matches(content, word) {
                points = points.saturating_add(self.config.word_match_score);
                matched += 1;
            }
        }

        let query = query.trim().to_lowercase();
        if !query.is_empty() && content.to_lowercase().contains(&query) {
            points = points.saturating_add(self.config.exact_phrase_bonus);
        }

        if !words.is_empty() && matched >= self.config.majority_threshold(words.len()) {
            points = points.saturating_add(self.config.majority_match_bonus);
        }

        CoreGate::Scored(points)
    }

    fn score_supporting(&self, content: &str, words: &[String]) -> u32 {
        let matched = words
            .iter()
            .filter(|word| self.classifier.is_supporting_term(word))
            .filter(|word| self.matcher.matches(content, word))
            .count();

        self.config
            .supporting_term_score
            .saturating_mul(u32::try_from(matched).unwrap_or(u32::MAX))
    }

    fn tool_usage_bonus(&self, entry: &ConversationEntry) -> u32 {
        match entry.entry_type.as_deref() {
            Some(kind) if self.config.tool_message_types.iter().any(|t| t == kind) => {
                self.config.tool_usage_score
            }
            _ => 0,
        }
    }

    fn file_reference_bonus(&self, content: &str) -> u32 {
        if self
            .config
            .file_reference_markers
            .iter()
            .any(|marker| content.contains(marker.as_str()))
        {
            self.config.file_reference_score
        } else {
            0
        }
    }

    fn project_match_bonus(&self, entry: &ConversationEntry, project: Option<&str>) -> u32 {
        match (project, entry.cwd.as_deref()) {
            (Some(project), Some(cwd)) if cwd.contains(project) => self.config.project_match_score,
            _ => 0,
        }
    }
}
