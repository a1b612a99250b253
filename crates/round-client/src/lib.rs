//! HTTP client for the DFLN backend
//!
//! One operation: trigger a training round upstream and parse the response.
//! No retry and no cancellation; a failed trigger is surfaced and the user
//! re-triggers manually.

use reqwest::{header, StatusCode};
use round_core::{RoundResult, SchemaError};
use thiserror::Error;

/// Backend base URL when nothing is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "DFLN_API_URL";

/// Why a round trigger failed. Each variant is recoverable by triggering
/// again; none of them clears previously displayed data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure
    #[error("failed to run round: {0}")]
    Transport(#[from] reqwest::Error),
    /// Backend answered outside 2xx
    #[error("backend error: {status}")]
    Status { status: StatusCode },
    /// Body did not match the round schema
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub struct RoundClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoundClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Trigger one training round upstream. Empty request body; the whole
    /// round result comes back in one response.
    pub async fn run_round(&self) -> Result<RoundResult, FetchError> {
        let url = run_round_url(&self.base_url);
        tracing::debug!("triggering round at {}", url);

        let response = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.text().await?;
        Ok(RoundResult::from_json(&body)?)
    }
}

fn run_round_url(base_url: &str) -> String {
    format!("{}/api/run-round", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_round_url() {
        assert_eq!(
            run_round_url("http://127.0.0.1:8000"),
            "http://127.0.0.1:8000/api/run-round"
        );
        assert_eq!(
            run_round_url("http://backend:8000/"),
            "http://backend:8000/api/run-round"
        );
    }

    #[test]
    fn test_schema_error_is_distinct_from_status() {
        let err = FetchError::from(RoundResult::from_json("not json").unwrap_err());
        assert!(matches!(err, FetchError::Schema(_)));
        assert!(err.to_string().contains("malformed round response"));

        let err = FetchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "backend error: 500 Internal Server Error");
    }
}
