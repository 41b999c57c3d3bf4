use super::{
    origin::AllowedOrigins,
    types::{ChatRequest, ChatResponse},
};
use crate::{error::ChatError, relay::ChatRelay};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
    pub allowed_origins: Arc<AllowedOrigins>,
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ChatError> {
    state.relay.ensure_configured()?;

    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejecting malformed chat request: {}", rejection.body_text());
        ChatError::from(rejection)
    })?;

    let response = state.relay.reply(request.message.as_deref()).await?;

    Ok(Json(ChatResponse { response }))
}
