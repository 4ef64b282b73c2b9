use crate::models::{ChatRequest, ChatResponse, HealthStatus, RootStatus};
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;

/// `GET /`: fixed confirmation, independent of configuration.
pub async fn root() -> Json<RootStatus> {
    Json(RootStatus::default())
}

/// `GET /health`: liveness probe. No dependency checks.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        service: "relay-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        log_store: state.relay.log_backend().to_string(),
        generation_configured: state.relay.generation_configured(),
    })
}

/// `POST /chat`: relay a message. Any well-formed request gets a 200, with
/// failures reported inside the `response` field.
///
/// Every body rejection (bad JSON, wrong content type, missing field) is a 422.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    Ok(Json(state.relay.handle_chat(&request.message).await))
}
