//! Scoring weights and vocabularies
//!
//! Everything the relevance scorer needs to know about a query lives here:
//! the point value of every signal, the recognizer for core technical terms
//! and the word sets that decide which query words earn supporting credit.
//! The configuration is plain data; [`super::RelevanceScorer::new`] compiles
//! it once and shares the result across every scoring call.

use crate::config::ConfigError;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Recognizer for query words that name a specific technology.
///
/// Matches a curated list of framework, language, platform and tool names,
/// `snake_case` identifiers, and letter-then-digit tokens such as `python3`
/// or `es2015`. Query words are lowercased before they reach the recognizer,
/// which is compiled case-insensitively as well.
pub const DEFAULT_CORE_TERM_PATTERN: &str = concat!(
    r"^(?:",
    r"react|preact|vue|nuxt|angular|svelte|sveltekit|solidjs|astro|remix|nextjs|",
    r"node|nodejs|deno|bun|express|nestjs|fastify|",
    r"typescript|javascript|python|rust|golang|java|kotlin|swift|ruby|php|elixir|",
    r"haskell|scala|clojure|zig|lua|bash|zsh|powershell|",
    r"docker|kubernetes|k8s|helm|terraform|ansible|nginx|",
    r"postgres|postgresql|mysql|sqlite|redis|mongodb|dynamodb|graphql|grpc|kafka|rabbitmq|",
    r"webpack|vite|rollup|esbuild|babel|eslint|prettier|biome|",
    r"jest|vitest|pytest|playwright|cypress|storybook|",
    r"tailwind|tailwindcss|django|flask|fastapi|rails|laravel|spring|",
    r"prisma|drizzle|supabase|firebase|vercel|netlify|cloudflare|",
    r"aws|gcp|azure|lambda|tokio|axum|serde|cargo|rustc|clippy|",
    r"npm|pnpm|yarn|git|github|gitlab|oauth|jwt|websocket|wasm|webassembly|",
    r"electron|tauri|expo|flutter|openai|anthropic|claude|mcp|llm|langchain|",
    r"numpy|pandas|pytorch|tensorflow|jupyter",
    r")$",
    r"|^[a-z][a-z0-9]*(?:_[a-z0-9]+)+$",
    r"|^[a-z]+[0-9][a-z0-9]*$",
);

/// Natural-language filler that is never a core or supporting term.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "into", "have", "been", "will", "just",
    "also", "some", "when", "what", "how", "does", "not", "but", "are", "was", "were", "can",
    "has", "had", "its", "your", "our", "you", "they",
];

/// Common words that are long enough to look meaningful but say nothing
/// about which conversation is wanted.
pub const DEFAULT_GENERIC_TERMS: &[&str] = &[
    "about", "after", "again", "before", "being", "build", "change", "changes", "class",
    "could", "create", "error", "errors", "every", "example", "files", "fixed", "fixing",
    "function", "getting", "issue", "issues", "make", "method", "might", "model", "never",
    "other", "problem", "problems", "project", "question", "should", "something", "their",
    "there", "these", "thing", "things", "those", "trying", "update", "using", "value",
    "where", "which", "while", "working", "would",
];

/// Official spellings of product names that carry interior capitals.
///
/// A content token written exactly like one of these counts as a normal
/// casing of its lowercase form, so `TypeScript` matches `typescript` while
/// `TypeSCRIPT` or `ReAct` still do not match their lowercase form.
pub const DEFAULT_CANONICAL_SPELLINGS: &[&str] = &[
    "TypeScript", "JavaScript", "GitHub", "GitLab", "GraphQL", "PostgreSQL", "MySQL", "SQLite",
    "MongoDB", "DynamoDB", "RabbitMQ", "WebAssembly", "WebSocket", "FastAPI", "NestJS",
    "NextJS", "NodeJS", "SvelteKit", "SolidJS", "TailwindCSS", "OpenAI", "LangChain", "NumPy",
    "PyTorch", "TensorFlow", "ESLint", "CloudFlare", "PowerShell",
];

/// Configuration for relevance scoring
///
/// # Example
///
/// ```no_run
/// use scrollback::search::ScoringConfig;
///
/// let config = ScoringConfig {
///     exact_match_score: 20,
///     generic_terms: vec!["widget".to_string()],
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per core technical term found in the content. Default: 10
    pub exact_match_score: u32,

    /// Points per supporting term found in the content. Default: 3
    pub supporting_term_score: u32,

    /// Points per other query word found in the content. Default: 2
    pub word_match_score: u32,

    /// Bonus when the whole query appears verbatim. Default: 5
    pub exact_phrase_bonus: u32,

    /// Bonus when enough query words match. Default: 4
    pub majority_match_bonus: u32,

    /// Bonus for tool invocations and tool results. Default: 5
    pub tool_usage_score: u32,

    /// Bonus for content that references source files. Default: 3
    pub file_reference_score: u32,

    /// Bonus when the message was written inside the requested project. Default: 5
    pub project_match_score: u32,

    /// Fraction of query words (rounded up) that must match for the majority bonus.
    ///
    /// Must lie in `(0.0, 1.0]`. Default: 0.6
    pub majority_ratio: f64,

    /// Query words shorter than this are dropped. Default: 3
    pub min_word_length: usize,

    /// Minimum length of a supporting term. Default: 5
    pub min_supporting_length: usize,

    /// Regex source recognizing core technical terms
    pub core_term_pattern: String,

    /// Words never treated as core or supporting terms
    pub stop_words: Vec<String>,

    /// Words never treated as supporting terms
    pub generic_terms: Vec<String>,

    /// Mixed-case spellings accepted as normal casing when matching content
    pub canonical_spellings: Vec<String>,

    /// Message `type` values that count as tool usage
    pub tool_message_types: Vec<String>,

    /// Substrings that mark a reference to a source file
    pub file_reference_markers: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exact_match_score: 10,
            supporting_term_score: 3,
            word_match_score: 2,
            exact_phrase_bonus: 5,
            majority_match_bonus: 4,
            tool_usage_score: 5,
            file_reference_score: 3,
            project_match_score: 5,
            majority_ratio: 0.6,
            min_word_length: 3,
            min_supporting_length: 5,
            core_term_pattern: DEFAULT_CORE_TERM_PATTERN.to_string(),
            stop_words: to_strings(DEFAULT_STOP_WORDS),
            generic_terms: to_strings(DEFAULT_GENERIC_TERMS),
            canonical_spellings: to_strings(DEFAULT_CANONICAL_SPELLINGS),
            tool_message_types: to_strings(&["tool_use", "tool_result"]),
            file_reference_markers: to_strings(&["src/", ".ts", ".js"]),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl ScoringConfig {
    /// Create a new scoring configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the core term recognizer.
    pub fn compile_core_pattern(&self) -> Result<Regex, ConfigError> {
        let regex = RegexBuilder::new(&self.core_term_pattern)
            .case_insensitive(true)
            .build()?;
        Ok(regex)
    }

    /// Validate the configuration
    ///
    /// Returns an error if any parameters are invalid:
    /// - `majority_ratio` must lie in `(0.0, 1.0]`
    /// - `min_word_length` must be at least 1
    /// - `core_term_pattern` must be non-empty and compile
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.majority_ratio > 0.0 && self.majority_ratio <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "majority_ratio must be in (0.0, 1.0], got {}",
                self.majority_ratio
            )));
        }
        if self.min_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "min_word_length must be at least 1".to_string(),
            ));
        }
        if self.core_term_pattern.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "core_term_pattern cannot be empty".to_string(),
            ));
        }
        self.compile_core_pattern()?;

        Ok(())
    }

    /// Number of matched words needed for the majority bonus.
    pub fn majority_threshold(&self, word_count: usize) -> usize {
        (word_count as f64 * self.majority_ratio).ceil() as usize
    }
}
