use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

/// The pool connects lazily: the service starts even when Postgres is down,
/// and the status endpoints report unreachability instead of the process
/// crash-looping on boot.
pub fn create_pool(config: &Config) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.db_pool_size)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect_lazy(&config.database_url)
        .expect("DATABASE_URL must be a valid Postgres URL")
}
