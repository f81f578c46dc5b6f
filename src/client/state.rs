use thiserror::Error;
use uuid::Uuid;

use super::relay_client::RelayFailure;
use crate::models::chat::Message;
use crate::models::relay::{ ErrorKind, RelayRequest };

pub const GREETING: &str = "Hello! I'm CareerCraft AI, your expert career advisor and résumé strategist. I can help you with:

• Résumé creation & optimization
• Job description analysis
• Cover letter support
• Interview preparation
• LinkedIn profile optimization
• Career coaching & guidance

What would you like help with today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendRejected {
    #[error("Message is empty")]
    Empty,
    #[error("A message is already being sent")]
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Reply(String),
    Failed(RelayFailure),
}

/// User-facing notice raised when a turn fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    RateLimited,
    PaymentRequired,
    Error,
}

impl Notice {
    pub fn from_failure(failure: &RelayFailure) -> Self {
        match failure {
            RelayFailure::Relay { kind: ErrorKind::RateLimited, .. } => Notice::RateLimited,
            RelayFailure::Relay { kind: ErrorKind::PaymentRequired, .. } => Notice::PaymentRequired,
            _ => Notice::Error,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notice::RateLimited => "Rate Limit Exceeded",
            Notice::PaymentRequired => "Credits Required",
            Notice::Error => "Error",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::RateLimited => "Please wait a moment before sending another message.",
            Notice::PaymentRequired => "Please add credits to continue using the AI assistant.",
            Notice::Error => "Failed to send message. Please try again.",
        }
    }
}

/// Conversation plus pending flag for one chat session. Lives as long as the
/// session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct ChatState {
    session_id: Uuid,
    messages: Vec<Message>,
    pending: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            messages: Vec::new(),
            pending: false,
        }
    }

    pub fn with_greeting() -> Self {
        let mut state = Self::new();
        state.messages.push(Message::assistant(GREETING));
        state
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends the user's message and marks the session pending. The returned
    /// request carries the whole transcript, including the new message.
    pub fn begin_send(&mut self, text: &str) -> Result<RelayRequest, SendRejected> {
        if self.pending {
            return Err(SendRejected::Pending);
        }
        let content = text.trim();
        if content.is_empty() {
            return Err(SendRejected::Empty);
        }

        self.messages.push(Message::user(content));
        self.pending = true;
        Ok(RelayRequest { messages: self.messages.clone() })
    }

    /// Settles the outstanding turn. A failed turn keeps the user's message
    /// but appends no reply.
    pub fn finish_send(&mut self, outcome: TurnOutcome) -> Option<Notice> {
        self.pending = false;
        match outcome {
            TurnOutcome::Reply(text) => {
                self.messages.push(Message::assistant(text));
                None
            }
            TurnOutcome::Failed(failure) => Some(Notice::from_failure(&failure)),
        }
    }
}
