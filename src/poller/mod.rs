use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::PollerConfig;
use crate::models::status::ConnectivityResult;

/// Lenient view of the status envelopes: `/api/status` and `/health` share
/// the `database` and `timestamp` fields but differ elsewhere, so everything
/// is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusPayload {
    pub status: Option<String>,
    pub success: Option<bool>,
    pub message: Option<String>,
    pub database: Option<ConnectivityResult>,
    pub timestamp: Option<String>,
}

/// For each base URL, `/api/status` first (the richer envelope), then
/// `/health`. The poll walks this list in order and takes the first hit.
pub fn candidate_endpoints(base_urls: &[String]) -> Vec<String> {
    let mut endpoints = Vec::with_capacity(base_urls.len() * 2);
    for base in base_urls {
        let base = base.trim_end_matches('/');
        endpoints.push(format!("{base}/api/status"));
        endpoints.push(format!("{base}/health"));
    }
    endpoints
}

pub fn render(payload: &StatusPayload, url: &str) -> String {
    match &payload.database {
        Some(db) if db.connected => {
            let server_time = db
                .timestamp
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string());
            format!("\u{1b}[32m\u{25cf}\u{1b}[0m database connected via {url} (server time {server_time})")
        }
        Some(db) => {
            let detail = db.error.as_deref().unwrap_or("unknown error");
            format!("\u{1b}[31m\u{25cf}\u{1b}[0m database unreachable via {url}: {detail}")
        }
        None => {
            let status = payload.status.as_deref().unwrap_or("no status reported");
            format!("\u{1b}[33m\u{25cf}\u{1b}[0m {url}: {status}")
        }
    }
}

async fn poll_once(client: &Client, endpoints: &[String]) -> Option<(String, StatusPayload)> {
    for url in endpoints {
        match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.json::<StatusPayload>().await {
                Ok(payload) => return Some((url.clone(), payload)),
                Err(err) => warn!(%url, error = %err, "malformed status payload"),
            },
            Ok(resp) => warn!(%url, status = %resp.status(), "status endpoint unavailable"),
            Err(err) => warn!(%url, error = %err, "failed to reach status endpoint"),
        }
    }
    None
}

/// Fixed-interval poll loop. No backoff and no coalescing: a slow response
/// simply pushes the next tick back. Runs until the process is killed.
pub async fn run(config: PollerConfig) {
    let client = Client::new();
    let endpoints = candidate_endpoints(&config.base_urls);

    info!(interval_secs = config.interval.as_secs(), "poller started");

    loop {
        match poll_once(&client, &endpoints).await {
            Some((url, payload)) => println!("{}", render(&payload, &url)),
            None => {
                println!("\u{1b}[31m\u{25cf}\u{1b}[0m unable to reach any status endpoint");
            }
        }

        tokio::time::sleep(config.interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_endpoints_prefer_api_status_and_keep_base_order() {
        let bases = vec![
            "http://localhost:3001".to_string(),
            "https://api.example.com/".to_string(),
        ];
        let endpoints = candidate_endpoints(&bases);

        assert_eq!(
            endpoints,
            vec![
                "http://localhost:3001/api/status",
                "http://localhost:3001/health",
                "https://api.example.com/api/status",
                "https://api.example.com/health",
            ]
        );
    }

    #[test]
    fn render_distinguishes_connected_and_failed_states() {
        let connected: StatusPayload = serde_json::from_str(
            r#"{"success":true,"database":{"connected":true,"status":"Database connection successful","timestamp":"2026-08-29T12:00:00Z"}}"#,
        )
        .unwrap();
        let line = render(&connected, "http://localhost:3001/api/status");
        assert!(line.contains("database connected"));
        assert!(line.contains("2026-08-29"));

        let failed: StatusPayload = serde_json::from_str(
            r#"{"status":"API has issues","database":{"connected":false,"error":"connection refused"}}"#,
        )
        .unwrap();
        let line = render(&failed, "http://localhost:3001/health");
        assert!(line.contains("database unreachable"));
        assert!(line.contains("connection refused"));
    }

    #[test]
    fn render_falls_back_to_status_text_without_database_section() {
        let payload: StatusPayload =
            serde_json::from_str(r#"{"status":"API is healthy"}"#).unwrap();
        let line = render(&payload, "http://localhost:3001/health");
        assert!(line.contains("API is healthy"));
    }
}
