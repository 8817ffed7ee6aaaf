//! Conversation history search
//!
//! [`HistorySearch`] ties a [`ConversationSource`] to a [`RelevanceScorer`]:
//! it walks the most recently active projects, reads their newest session
//! files concurrently, scores every message and returns the best hits.

use crate::config::{ScanConfig, ScrollbackConfig, validate_config};
use crate::discovery::{ConversationSource, SessionFile, decode_project_path};
use crate::models::ConversationEntry;
use crate::search::{RelevanceScorer, ScoreBreakdown};
use crate::timeframe::{TimeFilter, Timeframe, parse_timestamp};
use crate::{Result, ScrollbackError};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Default number of hits returned by a search.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Maximum excerpt length in characters.
const EXCERPT_CHARS: usize = 300;

/// A single search over the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Project path credited when it appears in a message's working directory
    pub project: Option<String>,
    /// Timeframe name, see [`Timeframe`]
    pub timeframe: Option<String>,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            project: None,
            timeframe: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = Some(timeframe.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// A scored message.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub score: u32,
    /// Decoded project path
    pub project: String,
    pub session_file: PathBuf,
    pub timestamp: Option<String>,
    pub role: Option<String>,
    pub excerpt: String,
    pub breakdown: ScoreBreakdown,
}

/// A recent session and a preview of how it started.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// Decoded project path
    pub project: String,
    pub session_id: String,
    pub path: PathBuf,
    pub modified: Option<DateTime<Utc>>,
    pub message_count: usize,
    pub first_message: Option<String>,
}

/// Relevance search over a conversation source.
#[derive(Debug, Clone)]
pub struct HistorySearch {
    source: Arc<dyn ConversationSource>,
    scorer: RelevanceScorer,
    scan: ScanConfig,
}

impl HistorySearch {
    /// Create a search over `source`, validating the configuration.
    pub fn new(source: Arc<dyn ConversationSource>, config: &ScrollbackConfig) -> Result<Self> {
        validate_config(config)?;

        Ok(Self {
            source,
            scorer: RelevanceScorer::new(&config.scoring)?,
            scan: config.scan.clone(),
        })
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    pub fn source(&self) -> &Arc<dyn ConversationSource> {
        &self.source
    }

    /// Search the history, best hits first.
    ///
    /// Returns [`ScrollbackError::EmptyQuery`] for a blank query and
    /// [`ScrollbackError::InvalidTimeframe`] for an unknown timeframe name.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(ScrollbackError::EmptyQuery);
        }

        if let Some(name) = request.timeframe.as_deref() {
            name.parse::<Timeframe>()?;
        }
        let filter = TimeFilter::from_timeframe(request.timeframe.as_deref());

        let sessions = self
            .collect_sessions(
                self.scan.max_projects_search,
                self.scan.max_files_per_project_search,
            )
            .await;
        let session_count = sessions.len();
        let project = request.project.as_deref();

        let mut hits: Vec<SearchHit> = stream::iter(sessions)
            .map(|session| self.score_session(session, query, project, filter))
            .buffer_unordered(self.scan.concurrency)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .flatten()
            .collect();

        let matched = hits.len();
        sort_hits(&mut hits);
        hits.truncate(request.limit);

        info!(
            query,
            sessions = session_count,
            matched,
            returned = hits.len(),
            "History search complete"
        );
        Ok(hits)
    }

    /// Most recently modified sessions across projects.
    pub async fn recent_sessions(&self, limit: usize) -> Vec<SessionSummary> {
        let mut sessions = self
            .collect_sessions(
                self.scan.max_projects_sessions,
                self.scan.max_files_per_project_sessions,
            )
            .await;
        sessions.sort_by(|a, b| b.modified.cmp(&a.modified));
        sessions.truncate(limit);

        stream::iter(sessions)
            .map(|session| self.summarize(session))
            .buffered(self.scan.concurrency)
            .collect()
            .await
    }

    /// Project directory names, most recently active first.
    pub async fn projects(&self) -> Vec<String> {
        self.source.projects(usize::MAX).await
    }

    async fn collect_sessions(&self, max_projects: usize, max_files: usize) -> Vec<SessionFile> {
        let projects = self.source.projects(max_projects).await;
        debug!(projects = projects.len(), "Collecting session files");

        stream::iter(projects)
            .map(|project| async move { self.source.sessions(&project, max_files).await })
            .buffered(self.scan.concurrency)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    async fn score_session(
        &self,
        session: SessionFile,
        query: &str,
        project: Option<&str>,
        filter: TimeFilter,
    ) -> Vec<SearchHit> {
        let project_path = decode_project_path(&session.project);

        self.source
            .read_entries(&session)
            .await
            .into_iter()
            .filter(|entry| entry.message.is_some())
            .filter(|entry| filter.accepts(entry.timestamp.as_deref()))
            .filter_map(|entry| {
                let breakdown = self.scorer.explain(&entry, query, project);
                let score = breakdown.total();
                trace!(session = %session.path.display(), score, "Scored entry");
                (score > 0).then(|| SearchHit {
                    score,
                    project: project_path.clone(),
                    session_file: session.path.clone(),
                    timestamp: entry.timestamp.clone(),
                    role: entry.role().map(str::to_string),
                    excerpt: excerpt(&entry.content()),
                    breakdown,
                })
            })
            .collect()
    }

    async fn summarize(&self, session: SessionFile) -> SessionSummary {
        let entries = self.source.read_entries(&session).await;
        let messages: Vec<&ConversationEntry> =
            entries.iter().filter(|e| e.message.is_some()).collect();

        let first_message = messages
            .iter()
            .find(|e| e.role() == Some("user"))
            .map(|e| excerpt(&e.content()))
            .filter(|text| !text.is_empty());

        SessionSummary {
            project: decode_project_path(&session.project),
            session_id: session.session_id(),
            modified: session.modified_at(),
            message_count: messages.len(),
            first_message,
            path: session.path,
        }
    }
}

/// Descending score; ties go to the newer message.
fn sort_hits(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| {
        let a_time = a.timestamp.as_deref().and_then(parse_timestamp);
        let b_time = b.timestamp.as_deref().and_then(parse_timestamp);
        b.score.cmp(&a.score).then_with(|| b_time.cmp(&a_time))
    });
}

/// Collapse whitespace and cut to [`EXCERPT_CHARS`] characters.
fn excerpt(content: &str) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= EXCERPT_CHARS {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}
