//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use super::public;
use crate::anthropic;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Produce the next assistant turn for the posted conversation.
///
/// Stateless per call: the handler forwards the received messages
/// verbatim with the process-wide instruction text attached and holds
/// no session state between invocations. The client owns the
/// conversation.
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> impl IntoResponse {
    let (api_hostname, api_key, model, system_prompt) = {
        let shared_state = state.read().expect("Unable to read shared state");
        let config = &shared_state.config;
        (
            config.anthropic_api_hostname.clone(),
            config.anthropic_api_key.clone(),
            config.anthropic_model.clone(),
            config.system_prompt.clone(),
        )
    };

    match anthropic::complete(
        &system_prompt,
        &payload.messages,
        &api_hostname,
        &api_key,
        &model,
    )
    .await
    {
        Ok(turn) => (
            StatusCode::OK,
            axum::Json(public::ChatResponse {
                response: turn.content,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Chat handler error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(public::ChatErrorResponse {
                    error: public::COMPLETION_FAILED_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
