//! Relevance scoring for conversation messages
//!
//! The scoring core is split in three:
//!
//! - [`terms`]: splits a query into words and classifies each one as a core
//!   technical term, a supporting term, or ignored
//! - [`matcher`]: the casing-aware match of a term against message content
//! - [`scorer`]: the core-term gate followed by supporting and context bonuses
//!
//! Everything here is synchronous and free of I/O. A [`RelevanceScorer`] is
//! built once from a [`ScoringConfig`] and then shared across every message of
//! a search.

pub mod matcher;
pub mod scorer;
pub mod scoring;
pub mod terms;

pub use matcher::{TermMatcher, matches_term};
pub use scorer::{CoreGate, RelevanceScorer, ScoreBreakdown};
pub use scoring::ScoringConfig;
pub use terms::{ClassifiedWord, QueryWordClass, TermClassifier};
