use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::audit::AuditEntry;
use crate::error::AppError;

/// Most recent audit entries for the dashboard, newest first.
pub async fn get_logs(State(state): State<AppState>) -> Result<Json<Vec<AuditEntry>>, AppError> {
    let entries = state
        .audit
        .list_recent(state.config.audit_log_limit)
        .await?;
    Ok(Json(entries))
}
