pub mod pool;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::error::ApiError;
use crate::models::status::ConnectivityResult;

/// Round-trips `SELECT NOW()` through the pool. sqlx acquires a connection
/// for the query and returns it to the pool on every exit path, so repeated
/// checks never grow the pool past its baseline.
pub async fn test_connection(pool: &PgPool) -> Result<ConnectivityResult, ApiError> {
    debug!("testing database connection");

    let server_time: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
        .fetch_one(pool)
        .await?;

    Ok(ConnectivityResult::ok(server_time))
}
