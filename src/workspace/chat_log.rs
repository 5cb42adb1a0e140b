//! Chat message log for the revision flow
//!
//! An append-only sequence of user and assistant messages, seeded with a
//! single assistant greeting. Messages are never mutated or removed.

use serde::{Deserialize, Serialize};

/// Greeting the log is seeded with
pub const GREETING: &str = "Hi! I can help update your mod. Describe what you want to change.";

/// Acknowledgement used when the service omits `aiMessage`
pub const DEFAULT_ACK: &str = "Done! The mod has been updated.";

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the revision conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Append-only conversation history
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// Create a log seeded with the assistant greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Assistant,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: Role::User,
            text: text.into(),
        });
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            text: text.into(),
        });
    }

    /// Messages in append order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
