//! Data models for conversation history.

pub mod message;

pub use message::{ConversationEntry, MessageBody, extract_content, parse_jsonl};
