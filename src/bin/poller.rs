use status_api::config::PollerConfig;
use status_api::poller;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = PollerConfig::from_env();
    poller::run(config).await;
}
