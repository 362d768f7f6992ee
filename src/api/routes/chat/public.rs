//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::Turn;

/// Fixed message returned on any completion failure. The raw
/// upstream error stays in the logs.
pub const COMPLETION_FAILED_MESSAGE: &str = "Failed to get response from Claude";

#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Turn>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatErrorResponse {
    pub error: String,
}
