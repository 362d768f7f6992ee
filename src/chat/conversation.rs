//! In-memory conversation state for one interactive session.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// One message in a conversation. Immutable once created; turns are
/// never edited or deleted individually.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: &str) -> Self {
        Turn {
            role: Role::User,
            content: content.to_string(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Turn {
            role: Role::Assistant,
            content: content.to_string(),
        }
    }
}

/// Ordered sequence of turns. Insertion order is chronological order
/// and the order replayed to the completion service.
///
/// Alternation (user first, strictly alternating roles) is an
/// invariant of the submission path in [`crate::chat::Session`], not
/// of `append` itself.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a turn at the end. Always succeeds.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// An owned copy of the full turn sequence, suitable for
    /// transmission. Independent of later mutation.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.clone()
    }

    /// Clear all turns, returning to the empty initial state.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
