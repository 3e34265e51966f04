//! Chat transcript message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the role of a message in the chat transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the scripted assistant.
    Assistant,
}

/// A single message in the chat transcript.
///
/// Messages are append-only: once pushed to the transcript they are never
/// reordered or mutated, and they live only as long as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Monotonically increasing id, unique within the session.
    pub id: u64,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Timestamp when the message was created.
    pub timestamp: DateTime<Utc>,
}
