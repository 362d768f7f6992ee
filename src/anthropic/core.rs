//! Client for the Anthropic messages API.
//!
//! One stateless round trip per call: the fixed instruction text plus
//! the verbatim turn sequence go out, one assistant turn comes back.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::chat::Turn;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MAX_TOKENS: u32 = 4096;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60 * 2);

/// Failure to obtain a valid completion. The messages here are
/// deliberately generic; upstream detail is logged inside
/// [`complete`] and never carried in the value.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Failed to reach the completion service")]
    Transport(#[source] reqwest::Error),
    #[error("Completion service returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("Completion service returned a malformed response")]
    MalformedResponse(#[source] serde_json::Error),
}

/// A single content block in a messages API response. Only `text`
/// blocks are consumed; everything else is passed over.
#[derive(Deserialize, Debug)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// Request the next assistant turn for `turns` with `system` attached
/// as the instruction text.
///
/// Exactly one network call is made per invocation. There is no
/// retry and no streaming; the caller decides whether to resubmit on
/// failure. A response with zero text blocks is a defined degenerate
/// success: the returned turn has empty content.
pub async fn complete(
    system: &str,
    turns: &[Turn],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Turn, CompletionError> {
    let payload = json!({
        "model": model,
        "max_tokens": MAX_TOKENS,
        "system": system,
        "messages": turns,
    });
    let url = format!("{}/v1/messages", api_hostname.trim_end_matches("/"));

    let response = reqwest::Client::new()
        .post(url)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .header("Content-Type", "application/json")
        .timeout(REQUEST_TIMEOUT)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Completion request failed: {}", e);
            CompletionError::Transport(e)
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Completion service returned {}: {}", status, body);
        return Err(CompletionError::UpstreamStatus(status));
    }

    let body = response.text().await.map_err(|e| {
        tracing::error!("Failed to read completion response body: {}", e);
        CompletionError::Transport(e)
    })?;
    let parsed = serde_json::from_str::<MessagesResponse>(&body).map_err(|e| {
        tracing::error!("Failed to parse completion response: {}\nBody: {}", e, body);
        CompletionError::MalformedResponse(e)
    })?;

    let text = parsed
        .content
        .iter()
        .find(|block| block.block_type == "text")
        .and_then(|block| block.text.as_deref())
        .unwrap_or_else(|| {
            tracing::debug!("Completion response contained no text block");
            ""
        });

    Ok(Turn::assistant(text))
}
