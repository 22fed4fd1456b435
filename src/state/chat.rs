#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{Part, StreamRecord, TurnPayload};

/// Synthetic assistant turn shown when the generation request fails.
pub const CONNECTION_ERROR_TEXT: &str = "Connection error. Is the recipe service running?";

/// Who authored a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Role name as the generation service expects it.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// One message in the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    /// The assistant asked a clarifying question; rendered distinctly.
    pub follow_up: bool,
    /// Still receiving streamed text (trailing placeholder turn).
    pub streaming: bool,
}

impl Turn {
    fn user(text: String) -> Self {
        Self { role: Role::User, text, follow_up: false, streaming: false }
    }

    fn placeholder() -> Self {
        Self { role: Role::Model, text: String::new(), follow_up: false, streaming: true }
    }
}

/// Where the chat flow currently is.
///
/// `Idle` doubles as the done state: once a stream finishes or fails the
/// flow is immediately ready for the next send. No cancellation is exposed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatStatus {
    #[default]
    Idle,
    Sending,
    Streaming,
}

/// Conversation state, transitioned only through named operations.
///
/// The normal lifecycle per send is `begin_send` (user turn appended
/// optimistically, no rollback path), then either `begin_stream` followed by
/// `apply_record` per streamed record and `finish_stream`, or `fail_stream`
/// at any point after `begin_send`.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub turns: Vec<Turn>,
    pub status: ChatStatus,
    pub draft: String,
    /// The last completed stream flagged a clarification request; gates the
    /// input placeholder text.
    pub awaiting_follow_up: bool,
    accumulated: String,
}

impl ChatState {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status == ChatStatus::Idle && !self.draft.trim().is_empty()
    }

    /// Take the draft as the outgoing message: append the user's turn to the
    /// visible history, clear the draft, and return the message together
    /// with the prior turn history as the generation service expects it.
    /// The history deliberately excludes the turn just added; the message
    /// travels in its own field.
    ///
    /// Returns `None` (and changes nothing) while a send is in flight or
    /// the draft is blank.
    pub fn begin_send(&mut self) -> Option<(String, Vec<TurnPayload>)> {
        if !self.can_submit() {
            return None;
        }
        let message = std::mem::take(&mut self.draft);
        let history = self.history_payload();
        self.turns.push(Turn::user(message.clone()));
        self.status = ChatStatus::Sending;
        Some((message, history))
    }

    /// The response is open: insert the placeholder turn that streamed text
    /// will progressively replace.
    pub fn begin_stream(&mut self) {
        self.accumulated.clear();
        self.turns.push(Turn::placeholder());
        self.status = ChatStatus::Streaming;
    }

    /// Apply one streamed record: append its text to the accumulator and
    /// replace the placeholder's text with the full accumulated text so far.
    pub fn apply_record(&mut self, record: &StreamRecord) {
        if let Some(text) = &record.text {
            self.accumulated.push_str(text);
        }
        let mut awaiting = self.awaiting_follow_up;
        if let Some(turn) = self.turns.last_mut().filter(|t| t.streaming) {
            turn.text.clone_from(&self.accumulated);
            if let Some(follow_up) = record.follow_up {
                turn.follow_up = follow_up;
                awaiting = follow_up;
            }
        }
        self.awaiting_follow_up = awaiting;
    }

    /// The stream ended: finalize the placeholder with the accumulated text
    /// (possibly empty) and return to idle. The awaiting-follow-up flag
    /// tracks whether the finished turn was flagged as a clarification
    /// request.
    pub fn finish_stream(&mut self) {
        if let Some(turn) = self.turns.last_mut().filter(|t| t.streaming) {
            turn.text.clone_from(&self.accumulated);
            turn.streaming = false;
            self.awaiting_follow_up = turn.follow_up;
        } else {
            self.awaiting_follow_up = false;
        }
        self.status = ChatStatus::Idle;
    }

    /// The request failed before or during streaming: show a single
    /// synthetic assistant turn with the fixed connectivity message,
    /// replacing the placeholder if one was already inserted. No retry.
    pub fn fail_stream(&mut self) {
        if self.turns.last().is_some_and(|t| t.streaming) {
            self.turns.pop();
        }
        self.turns.push(Turn {
            role: Role::Model,
            text: CONNECTION_ERROR_TEXT.to_owned(),
            follow_up: false,
            streaming: false,
        });
        self.status = ChatStatus::Idle;
        self.awaiting_follow_up = false;
    }

    /// Sign-out teardown: drop the whole conversation.
    pub fn clear(&mut self) {
        self.turns.clear();
        self.status = ChatStatus::Idle;
        self.draft.clear();
        self.awaiting_follow_up = false;
        self.accumulated.clear();
    }

    fn history_payload(&self) -> Vec<TurnPayload> {
        self.turns
            .iter()
            .map(|turn| TurnPayload {
                role: turn.role.wire_name().to_owned(),
                parts: vec![Part { text: turn.text.clone() }],
            })
            .collect()
    }
}
