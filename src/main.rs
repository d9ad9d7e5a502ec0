use std::sync::Arc;

use tracing::info;

use status_api::{config::Config, create_app, db, state::AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    info!(
        port = config.port,
        environment = %config.environment,
        database_host = %config.database_host,
        "starting status API"
    );

    let pool = db::pool::create_pool(&config);
    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let app = create_app(state.clone());

    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind tcp listener");

    info!(%addr, "listening");

    axum::serve(listener, app)
        .await
        .expect("failed to start server");
}
