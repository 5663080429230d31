//! HTTP client for the title lookup endpoint
//!
//! One request shape: `GET <endpoint>?title=<partial>` answered by a JSON
//! array of suggestion records. Non-2xx statuses and unparseable bodies are
//! failures; what to do with the previous suggestion list is the caller's
//! decision.

use std::time::Duration;

use thiserror::Error;

use super::suggestion::Suggestion;

/// Errors that can occur during a title lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// The configured endpoint is not a valid URL
    #[error("Invalid endpoint URL: {0}")]
    Endpoint(String),

    /// Network error during the request (connect failure, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("Lookup endpoint returned HTTP {code}")]
    Api { code: u16 },

    /// The response body was not a JSON array of suggestion records
    #[error("Malformed lookup response: {0}")]
    Parse(String),
}

/// Client for the title lookup endpoint
#[derive(Debug, Clone)]
pub struct TitleClient {
    endpoint: reqwest::Url,
    http: reqwest::blocking::Client,
}

impl TitleClient {
    /// Create a new client for the given endpoint
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, LookupError> {
        let endpoint =
            reqwest::Url::parse(endpoint).map_err(|e| LookupError::Endpoint(e.to_string()))?;

        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self { endpoint, http })
    }

    /// Fetch suggestions matching a partial title.
    ///
    /// The query text travels as a URL-encoded `title` parameter. Records
    /// come back in endpoint order and are kept that way: no re-sorting, no
    /// de-duplication.
    pub fn search(&self, title: &str) -> Result<Vec<Suggestion>, LookupError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("title", title)])
            .send()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Api {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| LookupError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
