use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

use crate::state::AppState;

// Diagnostic echo of the non-secret parts of the configuration.
// Deliberately does not touch the database.
pub async fn debug_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Status API debug info",
        "timestamp": Utc::now(),
        "env": state.config.environment,
        "databaseHost": state.config.database_host,
    }))
}
