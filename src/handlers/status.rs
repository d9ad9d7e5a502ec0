use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use crate::{db, models::status::ConnectivityResult, state::AppState};

pub async fn api_status(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();

    match db::test_connection(&state.pool).await {
        Ok(result) => Json(json!({
            "success": true,
            "message": "API running normally",
            "database": result,
            "api": {
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "environment": state.config.environment,
            },
            "timestamp": now,
        })),
        Err(err) => {
            warn!(error = %err, "status check failed");
            let message = err.to_string();
            Json(json!({
                "success": false,
                "message": "Error connecting to database",
                "error": message.clone(),
                "database": ConnectivityResult::failed(message),
                "timestamp": now,
            }))
        }
    }
}
