use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::error::AppError;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Ready once the store answers a query.
pub async fn ready(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    state.repo.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        AppError::Unavailable("database unreachable".into())
    })?;
    Ok(Json(serde_json::json!({"status": "ready"})))
}
