//! Conversation Routes - Tavus conversation creation

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use tavus_relay::{ConversationCreated, RelayError};

use super::ApiError;
use crate::AppState;

/// Create a Tavus conversation from the optional JSON body
pub async fn create_conversation(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ConversationCreated>, ApiError> {
    let body = body.map_err(|rejection| {
        tracing::info!(error = %rejection, "Failed to read request body");
        RelayError::UnreadableRequestBody {
            status_code: rejection.status().as_u16(),
            details: rejection.body_text(),
        }
    })?;
    let created = state.conversations.create(&body).await?;
    Ok(Json(created))
}

/// CORS preflight
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> ApiError {
    ApiError(RelayError::NotFound)
}

pub fn router(relay_path: &str) -> Router<AppState> {
    Router::new().route(
        relay_path,
        post(create_conversation)
            .options(preflight)
            .fallback(not_found),
    )
}
