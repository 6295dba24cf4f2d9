//! Scripted chat transcript.
//!
//! Replies are canned; which one is picked depends only on the RNG the
//! caller passes in, so tests can seed it.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::chat::{CANNED_REPLIES, INITIAL_MESSAGES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    System,
    User,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: usize,
    pub sender: Sender,
    pub text: String,
}

static MESSAGE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MESSAGE_COUNTER.fetch_add(1, Ordering::Relaxed),
            sender,
            text: text.into(),
        }
    }
}

impl PartialEq for ChatMessage {
    fn eq(&self, other: &Self) -> bool {
        self.sender == other.sender && self.text == other.text
    }
}

/// Transcript shown before the user types anything.
pub fn initial_messages() -> Vec<ChatMessage> {
    INITIAL_MESSAGES
        .iter()
        .map(|(sender, text)| ChatMessage::new(*sender, *text))
        .collect()
}

/// Build the user message for a submitted draft; blank drafts produce none.
pub fn user_message(draft: &str) -> Option<ChatMessage> {
    let text = draft.trim();
    (!text.is_empty()).then(|| ChatMessage::new(Sender::User, text))
}

/// Pick one canned system reply uniformly at random.
pub fn pick_reply<R: Rng + ?Sized>(rng: &mut R) -> ChatMessage {
    let text = CANNED_REPLIES.choose(rng).copied().unwrap_or_default();
    ChatMessage::new(Sender::System, text)
}
