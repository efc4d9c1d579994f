//! Session domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
            Self::System => "System",
        }
    }
}

/// A message in the conversation (Entity)
///
/// Timestamps are recorded so the transcript export carries when each
/// exchange happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");

        let msg = ChatMessage::assistant("hi");
        assert_eq!(msg.role, Role::Assistant);

        let msg = ChatMessage::system("notice");
        assert_eq!(msg.role, Role::System);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "You");
        assert_eq!(Role::Assistant.label(), "Assistant");
        assert_eq!(Role::System.label(), "System");
    }

    #[test]
    fn test_message_serde_round_trip() {
        let msg = ChatMessage::user("what is chapter 3 about?");
        let json = serde_json::to_string(&msg).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role, Role::User);
        assert_eq!(back.content, msg.content);
        assert_eq!(back.timestamp, msg.timestamp);
    }
}
