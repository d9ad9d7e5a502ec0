use thiserror::Error;

/// The one failure mode on the status surface. It never reaches the
/// transport layer: handlers fold it into the `connected:false` branch
/// of their JSON envelope and still answer 200.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database connection failed: {0}")]
    Connectivity(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Connectivity(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_error_carries_driver_message() {
        let err = ApiError::Connectivity("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Database connection failed: connection refused"
        );
    }
}
