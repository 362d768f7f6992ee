//! Session controller that orchestrates one submission cycle at a
//! time over a [`Conversation`].

use async_trait::async_trait;
use thiserror::Error;

use crate::anthropic::{self, CompletionError};
use crate::chat::{Conversation, Turn};
use crate::core::AppConfig;

/// Synthetic assistant reply appended when a completion cycle fails.
pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I encountered an error. Please try again.";

/// Rejections raised before any turn is appended.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Empty or whitespace-only input. Never reaches the backend.
    #[error("Message is empty")]
    EmptyInput,
    /// A completion call is already in flight for this session.
    #[error("A completion is already in flight")]
    Busy,
}

/// Boundary to the completion service so the session controller can
/// be exercised against a mock in tests.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, turns: &[Turn]) -> Result<Turn, CompletionError>;
}

/// Live backend that calls the Anthropic messages API with the
/// process-wide instruction configuration attached.
pub struct AnthropicBackend {
    config: AppConfig,
}

impl AnthropicBackend {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CompletionBackend for AnthropicBackend {
    async fn complete(&self, turns: &[Turn]) -> Result<Turn, CompletionError> {
        anthropic::complete(
            &self.config.system_prompt,
            turns,
            &self.config.anthropic_api_hostname,
            &self.config.anthropic_api_key,
            &self.config.anthropic_model,
        )
        .await
    }
}

/// Owns the conversation for one interactive session and runs the
/// submission cycle:
///
/// ```text
/// IDLE -> SENDING -> AWAITING_COMPLETION -> APPENDING_RESPONSE -> IDLE
///                                        \-> DEGRADED (apology) -> IDLE
/// ```
///
/// The `busy` flag is the sole mutual-exclusion rule: at most one
/// in-flight completion call per conversation.
pub struct Session<B> {
    conversation: Conversation,
    backend: B,
    busy: bool,
}

impl<B: CompletionBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            conversation: Conversation::new(),
            backend,
            busy: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The full turn sequence so far.
    pub fn transcript(&self) -> Vec<Turn> {
        self.conversation.snapshot()
    }

    /// Discard the conversation and start a fresh session.
    pub fn reset(&mut self) {
        self.conversation.reset();
    }

    /// Run one submission cycle and return the assistant turn that
    /// was appended.
    ///
    /// A failed completion call is recovered here: the user turn
    /// stays appended exactly once and a synthetic apology turn takes
    /// the assistant's place, so a failed cycle never corrupts the
    /// conversation and the user may simply resubmit.
    pub async fn submit(&mut self, input: &str) -> Result<Turn, SubmitError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SubmitError::EmptyInput);
        }
        if self.busy {
            return Err(SubmitError::Busy);
        }

        self.busy = true;
        self.conversation.append(Turn::user(input));

        // The only suspension point in the cycle. Exactly one call,
        // no internal retry.
        let result = self.backend.complete(&self.conversation.snapshot()).await;

        let reply = match result {
            Ok(turn) => turn,
            Err(e) => {
                tracing::error!("Completion cycle failed: {}", e);
                Turn::assistant(APOLOGY_MESSAGE)
            }
        };
        self.conversation.append(reply.clone());
        self.busy = false;

        Ok(reply)
    }
}
