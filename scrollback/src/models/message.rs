//! Session file entries.
//!
//! Each line of a Claude session file is a JSON object describing one event in
//! the conversation. Only the fields the search needs are modelled; everything
//! else is ignored on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of a session JSONL file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversationEntry {
    /// Event type, e.g. `user`, `assistant`, `tool_use`, `tool_result`, `summary`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,

    /// The message payload, absent for bookkeeping events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageBody>,

    /// Working directory the session was running in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,

    /// RFC 3339 timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(rename = "gitBranch", skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
}

/// Message payload: a role and either plain text or a list of content blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MessageBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    pub content: Value,
}

impl ConversationEntry {
    /// Entry with plain text content, mostly useful for tests and examples.
    pub fn text(role: &str, content: impl Into<String>) -> Self {
        Self {
            entry_type: Some(role.to_string()),
            message: Some(MessageBody {
                role: Some(role.to_string()),
                content: Value::String(content.into()),
            }),
            ..Default::default()
        }
    }

    /// Set the working directory.
    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set the event type.
    pub fn with_type(mut self, entry_type: impl Into<String>) -> Self {
        self.entry_type = Some(entry_type.into());
        self
    }

    /// Flattened text of the message, empty when there is no message.
    pub fn content(&self) -> String {
        self.message
            .as_ref()
            .map(|m| extract_content(&m.content))
            .unwrap_or_default()
    }

    /// Role of the message author, falling back to the event type.
    pub fn role(&self) -> Option<&str> {
        self.message
            .as_ref()
            .and_then(|m| m.role.as_deref())
            .or(self.entry_type.as_deref())
    }
}

/// Flatten a message `content` field into searchable text.
///
/// Plain strings are returned as is. Block lists contribute the text of text
/// blocks, `[Tool: <name>]` for tool invocations and `[Tool Result]` for tool
/// results, joined by single spaces and trimmed. Any other shape yields an
/// empty string.
pub fn extract_content(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(blocks) => blocks
            .iter()
            .map(project_block)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string(),
        _ => String::new(),
    }
}

fn project_block(block: &Value) -> String {
    let field = |name: &str| block.get(name).and_then(Value::as_str).unwrap_or_default();

    match field("type") {
        "text" => field("text").to_string(),
        "tool_use" => format!("[Tool: {}]", field("name")),
        "tool_result" => "[Tool Result]".to_string(),
        _ => String::new(),
    }
}

/// Parse a session file body, skipping blank and malformed lines.
pub fn parse_jsonl(body: &str) -> Vec<ConversationEntry> {
    body.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match serde_json::from_str(line) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::trace!(line = index + 1, error = %e, "Skipping malformed session line");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_plain_string() {
        assert_eq!(extract_content(&json!("hello world")), "hello world");
    }

    #[test]
    fn test_extract_blocks() {
        let content = json!([
            { "type": "text", "text": "Running the build" },
            { "type": "tool_use", "name": "Bash", "input": { "command": "cargo build" } },
            { "type": "tool_result", "tool_use_id": "abc", "content": "ok" },
            { "type": "image", "source": {} },
            { "type": "text", "text": "done" }
        ]);
        assert_eq!(
            extract_content(&content),
            "Running the build [Tool: Bash] [Tool Result]  done"
        );
    }

    #[test]
    fn test_extract_trims_outer_whitespace() {
        let content = json!([{ "type": "image" }, { "type": "text", "text": "only text" }]);
        assert_eq!(extract_content(&content), "only text");
    }

    #[test]
    fn test_extract_other_shapes_is_empty() {
        assert_eq!(extract_content(&json!(null)), "");
        assert_eq!(extract_content(&json!(42)), "");
        assert_eq!(extract_content(&json!({ "text": "nope" })), "");
        assert_eq!(extract_content(&json!([])), "");
    }

    #[test]
    fn test_entry_deserialization() {
        let line = r#"{"type":"user","sessionId":"s1","cwd":"/home/me/app","timestamp":"2025-01-01T10:00:00.000Z","gitBranch":"main","message":{"role":"user","content":"fix the react hooks"},"extra":true}"#;
        let entry: ConversationEntry = serde_json::from_str(line).unwrap();

        assert_eq!(entry.entry_type.as_deref(), Some("user"));
        assert_eq!(entry.session_id.as_deref(), Some("s1"));
        assert_eq!(entry.git_branch.as_deref(), Some("main"));
        assert_eq!(entry.cwd.as_deref(), Some("/home/me/app"));
        assert_eq!(entry.role(), Some("user"));
        assert_eq!(entry.content(), "fix the react hooks");
    }

    #[test]
    fn test_entry_without_message_has_empty_content() {
        let entry: ConversationEntry =
            serde_json::from_str(r#"{"type":"summary","summary":"x"}"#).unwrap();
        assert!(entry.message.is_none());
        assert_eq!(entry.content(), "");
        assert_eq!(entry.role(), Some("summary"));
    }

    #[test]
    fn test_parse_jsonl_skips_bad_lines() {
        let body = concat!(
            r#"{"type":"user","message":{"role":"user","content":"one"}}"#,
            "\n",
            "\n",
            "not json at all\n",
            r#"{"type":"assistant","message":{"role":"assistant","content":[{"type":"text","text":"two"}]}}"#,
            "\n",
        );
        let entries = parse_jsonl(body);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content(), "one");
        assert_eq!(entries[1].content(), "two");
    }
}
