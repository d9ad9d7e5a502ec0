use std::env;
use std::time::Duration;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_host: String,
    pub port: u16,
    pub environment: String,
    pub allowed_origins: Vec<String>,
    pub db_pool_size: u32,
    pub db_acquire_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        // DATABASE_URL is the only place credentials live.
        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let database_host = env::var("DB_HOST")
            .unwrap_or_else(|_| "localhost".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        let environment = env::var("NODE_ENV")
            .unwrap_or_else(|_| "development".to_string());

        let allowed_origins = env::var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| default_origins());

        let db_pool_size = env::var("DB_POOL_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .expect("DB_POOL_SIZE must be a valid u32");

        let db_acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        Self {
            database_url,
            database_host,
            port,
            environment,
            allowed_origins,
            db_pool_size,
            db_acquire_timeout_secs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub base_urls: Vec<String>,
    pub interval: Duration,
}

impl PollerConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        let base_urls = env::var("STATUS_API_URLS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| vec!["http://localhost:3001".to_string()]);

        let interval_secs = env::var("POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .expect("POLL_INTERVAL_SECS must be a valid u64");

        Self {
            base_urls,
            interval: Duration::from_secs(interval_secs),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:3002".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://a.test, http://b.test ,,http://c.test");
        assert_eq!(
            origins,
            vec!["http://a.test", "http://b.test", "http://c.test"]
        );
    }

    #[test]
    fn parse_origins_empty_input_yields_no_origins() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn default_origins_are_local_frontends() {
        let origins = default_origins();
        assert_eq!(origins.len(), 2);
        assert!(origins.iter().all(|o| o.starts_with("http://localhost:")));
    }
}
