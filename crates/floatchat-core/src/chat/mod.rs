//! Chat domain module.
//!
//! This module contains the chat transcript types and the session state
//! machine that drives the scripted assistant reply.
//!
//! - `message`: transcript types (`MessageRole`, `Message`)
//! - `session`: session lifecycle (`ChatSession`, `SubmitOutcome`)

mod message;
mod session;

// Re-export public API
pub use message::{Message, MessageRole};
pub use session::{ChatSession, SubmitOutcome, GREETING, SCRIPTED_REPLY};
