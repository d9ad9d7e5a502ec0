use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use crate::{db, models::status::ConnectivityResult, state::AppState};

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match db::test_connection(&state.pool).await {
        Ok(result) => Json(json!({
            "status": "API is healthy",
            "database": result,
            "timestamp": Utc::now(),
        })),
        Err(err) => {
            warn!(error = %err, "health check failed");
            Json(json!({
                "status": "API has issues",
                "database": ConnectivityResult::failed(err.to_string()),
                "timestamp": Utc::now(),
            }))
        }
    }
}
