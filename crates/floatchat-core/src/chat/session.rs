//! Chat session state and the scripted-reply lifecycle.
//!
//! A session owns the ordered transcript, the text being composed, and a
//! queue of scheduled replies. The original widget fired each reply from a
//! timer callback; here every submission records a due instant against the
//! injected clock and the presentation layer drains due replies on its
//! tick, which keeps the whole lifecycle deterministic under test.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::message::{Message, MessageRole};
use crate::clock::Clock;

/// Fixed greeting seeded into every new session.
pub const GREETING: &str = "Hello! I'm FloatChat-AI, your AI assistant for ocean data exploration. How can I help you today?";

/// Fixed content of every scripted assistant reply.
pub const SCRIPTED_REPLY: &str = "I understand you're interested in ocean data. Let me help you explore the available datasets and visualizations.";

/// Outcome of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A user message was appended and one reply was scheduled.
    Accepted,
    /// The text was empty or whitespace-only; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledReply {
    due_at: DateTime<Utc>,
}

/// A single chat session.
///
/// The transcript starts with the assistant greeting. Submitting non-empty
/// text appends a user message immediately and schedules exactly one
/// scripted reply after the configured delay. Submissions while replies are
/// still outstanding are accepted; each schedules its own independent
/// reply. Replies are not cancellable; dropping the session drops whatever
/// is still scheduled.
pub struct ChatSession {
    id: String,
    messages: Vec<Message>,
    pending_input: String,
    scheduled: VecDeque<ScheduledReply>,
    next_message_id: u64,
    reply_delay: Duration,
    clock: Arc<dyn Clock>,
}

impl ChatSession {
    /// Creates a session seeded with the assistant greeting.
    pub fn new(reply_delay: Duration, clock: Arc<dyn Clock>) -> Self {
        let mut session = Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            pending_input: String::new(),
            scheduled: VecDeque::new(),
            next_message_id: 0,
            reply_delay,
            clock,
        };
        session.append(MessageRole::Assistant, GREETING.to_string());
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The transcript in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The not-yet-submitted text being composed.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Number of scheduled replies that have not been delivered yet.
    pub fn outstanding_replies(&self) -> usize {
        self.scheduled.len()
    }

    /// Appends a character to the composed input.
    pub fn push_char(&mut self, c: char) {
        self.pending_input.push(c);
    }

    /// Removes the last character of the composed input, if any.
    pub fn backspace(&mut self) {
        self.pending_input.pop();
    }

    /// Submits the composed input, clearing it.
    pub fn submit_pending(&mut self) -> SubmitOutcome {
        let text = std::mem::take(&mut self.pending_input);
        self.submit(&text)
    }

    /// Submits `text` as a user message.
    ///
    /// Empty or whitespace-only text is ignored: nothing is appended and no
    /// reply is scheduled. Otherwise the user message is appended, the
    /// composed input is cleared, and one scripted reply is scheduled to
    /// come due after the configured delay.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.pending_input.clear();
        self.append(MessageRole::User, text.to_string());

        let due_at = self.clock.now() + self.reply_delay;
        self.scheduled.push_back(ScheduledReply { due_at });
        tracing::debug!(
            session_id = %self.id,
            outstanding = self.scheduled.len(),
            "scheduled scripted reply"
        );

        SubmitOutcome::Accepted
    }

    /// Delivers every scheduled reply whose due instant has passed,
    /// appending one assistant message per delivery.
    ///
    /// Returns the number of messages appended; a non-zero return is the
    /// scroll-to-latest signal for the presentation layer.
    pub fn poll_replies(&mut self) -> usize {
        let now = self.clock.now();
        let mut delivered = 0;

        // Submissions share a fixed delay, so the queue stays ordered by
        // due instant and checking the front suffices.
        while self.scheduled.front().is_some_and(|r| r.due_at <= now) {
            self.scheduled.pop_front();
            self.append(MessageRole::Assistant, SCRIPTED_REPLY.to_string());
            delivered += 1;
        }

        if delivered > 0 {
            tracing::debug!(
                session_id = %self.id,
                delivered,
                remaining = self.scheduled.len(),
                "delivered scripted replies"
            );
        }
        delivered
    }

    fn append(&mut self, role: MessageRole, content: String) -> &Message {
        let message = Message {
            id: self.next_message_id,
            role,
            content,
            timestamp: self.clock.now(),
        };
        self.next_message_id += 1;
        self.messages.push(message);
        // Safe to unwrap because we just pushed an element
        self.messages.last().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn delay() -> Duration {
        Duration::milliseconds(1000)
    }

    fn session() -> (ChatSession, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let session = ChatSession::new(delay(), clock.clone());
        (session, clock)
    }

    #[test]
    fn test_new_session_is_seeded_with_greeting() {
        let (session, _clock) = session();
        assert_eq!(session.messages().len(), 1);
        let greeting = &session.messages()[0];
        assert_eq!(greeting.role, MessageRole::Assistant);
        assert_eq!(greeting.content, GREETING);
        assert_eq!(session.outstanding_replies(), 0);
    }

    #[test]
    fn test_whitespace_submission_is_a_noop() {
        let (mut session, _clock) = session();
        assert_eq!(session.submit(""), SubmitOutcome::Ignored);
        assert_eq!(session.submit("  "), SubmitOutcome::Ignored);
        assert_eq!(session.submit("\t\n"), SubmitOutcome::Ignored);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.outstanding_replies(), 0);
    }

    #[test]
    fn test_submission_appends_user_message_and_schedules_reply() {
        let (mut session, clock) = session();
        assert_eq!(session.submit("hello"), SubmitOutcome::Accepted);

        assert_eq!(session.messages().len(), 2);
        let user = &session.messages()[1];
        assert_eq!(user.role, MessageRole::User);
        assert_eq!(user.content, "hello");
        assert_eq!(session.outstanding_replies(), 1);

        // Not due yet
        clock.advance(Duration::milliseconds(999));
        assert_eq!(session.poll_replies(), 0);
        assert_eq!(session.messages().len(), 2);

        clock.advance(Duration::milliseconds(1));
        assert_eq!(session.poll_replies(), 1);
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.outstanding_replies(), 0);

        let reply = &session.messages()[2];
        assert_eq!(reply.role, MessageRole::Assistant);
        assert_eq!(reply.content, SCRIPTED_REPLY);
    }

    #[test]
    fn test_overlapping_submissions_each_get_a_reply() {
        let (mut session, clock) = session();
        session.submit("first");
        clock.advance(Duration::milliseconds(400));
        session.submit("second");
        assert_eq!(session.outstanding_replies(), 2);

        // Only the first reply is due at t=1000
        clock.advance(Duration::milliseconds(600));
        assert_eq!(session.poll_replies(), 1);
        assert_eq!(session.outstanding_replies(), 1);

        clock.advance(Duration::milliseconds(400));
        assert_eq!(session.poll_replies(), 1);
        assert_eq!(session.outstanding_replies(), 0);
        // greeting + 2 user + 2 assistant
        assert_eq!(session.messages().len(), 5);
    }

    #[test]
    fn test_poll_delivers_all_overdue_replies_at_once() {
        let (mut session, clock) = session();
        session.submit("one");
        session.submit("two");
        session.submit("three");

        clock.advance(Duration::milliseconds(5000));
        assert_eq!(session.poll_replies(), 3);
        assert_eq!(session.outstanding_replies(), 0);
    }

    #[test]
    fn test_message_ids_are_monotonic_and_transcript_is_chronological() {
        let (mut session, clock) = session();
        session.submit("a");
        clock.advance(delay());
        session.poll_replies();
        session.submit("b");

        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        for pair in session.messages().windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn test_submit_pending_clears_composed_input() {
        let (mut session, _clock) = session();
        for c in "hi there".chars() {
            session.push_char(c);
        }
        session.backspace();
        assert_eq!(session.pending_input(), "hi ther");

        assert_eq!(session.submit_pending(), SubmitOutcome::Accepted);
        assert_eq!(session.pending_input(), "");
        assert_eq!(session.messages()[1].content, "hi ther");
    }

    #[test]
    fn test_submit_pending_with_blank_input_is_ignored() {
        let (mut session, _clock) = session();
        session.push_char(' ');
        assert_eq!(session.submit_pending(), SubmitOutcome::Ignored);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.pending_input(), "");
    }
}
