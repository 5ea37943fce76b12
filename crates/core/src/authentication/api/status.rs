use crate::app_state::AppState;
use crate::authentication::guards::ApiKeyGuard;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub authenticated: bool,
    pub message: String,
}

/// Simple endpoint to verify an API key is accepted.
pub async fn status(
    State(state): State<Arc<AppState>>,
    _guard: ApiKeyGuard,
) -> Json<StatusResponse> {
    Json(StatusResponse {
        authenticated: true,
        message: format!("API key accepted by {}", state.name),
    })
}
