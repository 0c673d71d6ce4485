//! Transcript entry types for Clara.
//!
//! The transcript is the ordered list of user and assistant messages shown
//! to the user. Entries are appended in arrival order and never reordered;
//! the assistant's in-progress entry grows in place while a reply streams.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::User => write!(f, "user"),
            Author::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single entry in the conversation transcript.
///
/// User entries are immutable once created. The assistant's in-progress
/// entry is mutated in place (its text grows) until the stream ends, after
/// which it is finalized implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub author: Author,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// True for entries that carry an error notice rather than content.
    #[serde(default)]
    pub error: bool,
}

impl TranscriptEntry {
    /// Create a finalized user entry.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            author: Author::User,
            text: text.into(),
            created_at: Utc::now(),
            error: false,
        }
    }

    /// Create a finalized assistant entry (greetings, notices).
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            author: Author::Assistant,
            text: text.into(),
            created_at: Utc::now(),
            error: false,
        }
    }

    /// Create the empty in-progress assistant entry inserted before any
    /// fragment arrives.
    pub fn assistant_placeholder() -> Self {
        Self::assistant(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_display() {
        assert_eq!(Author::User.to_string(), "user");
        assert_eq!(Author::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_author_serde() {
        let json = serde_json::to_string(&Author::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: Author = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Author::Assistant);
    }

    #[test]
    fn test_user_entry() {
        let entry = TranscriptEntry::user("Hello");
        assert_eq!(entry.author, Author::User);
        assert_eq!(entry.text, "Hello");
        assert!(!entry.error);
    }

    #[test]
    fn test_assistant_placeholder_is_empty() {
        let entry = TranscriptEntry::assistant_placeholder();
        assert_eq!(entry.author, Author::Assistant);
        assert!(entry.text.is_empty());
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = TranscriptEntry::user("a");
        let b = TranscriptEntry::user("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_entry_serde_error_flag_defaults_false() {
        let json = r#"{
            "id": "0192e8a0-0000-7000-8000-000000000000",
            "author": "user",
            "text": "hi",
            "created_at": "2025-01-01T00:00:00Z"
        }"#;
        let entry: TranscriptEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.error);
    }
}
