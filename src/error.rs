//! Error types for the CoinGecko client library.

use thiserror::Error;

/// The main error type for all CoinGecko client operations.
#[derive(Error, Debug)]
pub enum CoinGeckoError {
    /// No connection pool is active
    #[error("no active session: call start() or enter a session scope before sending requests")]
    NoSession,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// CoinGecko API returned an error status
    #[error("CoinGecko API error: {0}")]
    Api(ApiError),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_ms:?}ms")]
    RateLimitExceeded {
        /// Suggested wait time in milliseconds before retrying
        retry_after_ms: Option<u64>,
    },

    /// The API returned a success status with a body that is not JSON
    #[error("unknown API response: {0}")]
    UnknownResponse(UnknownResponse),
}

/// An error status returned by the CoinGecko API.
///
/// CoinGecko error bodies are not stable across endpoints, so the status
/// line is the only contract: the canonical reason phrase plus the numeric
/// status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Reason phrase for the status (e.g. "Not Found")
    pub reason: String,
    /// HTTP status code of the response
    pub status_code: u16,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (status {})", self.reason, self.status_code)
    }
}

impl ApiError {
    /// Create a new API error from a reason phrase and status code.
    pub fn new(reason: impl Into<String>, status_code: u16) -> Self {
        Self {
            reason: reason.into(),
            status_code,
        }
    }

    /// Build an API error from a response status.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::new(status.canonical_reason().unwrap_or("Unknown"), status.as_u16())
    }

    /// Check if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Check if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Check if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }
}

/// A success response whose body could not be decoded as JSON.
///
/// Carries the raw payload so callers can inspect what the server actually
/// sent instead of losing it to a bare parse error.
#[derive(Error, Debug)]
#[error("{url} returned an undecodable body (status {status_code})")]
pub struct UnknownResponse {
    /// Full URL of the request
    pub url: String,
    /// HTTP status code of the response
    pub status_code: u16,
    /// Raw response body as received
    pub body: String,
    /// The underlying JSON decode failure
    #[source]
    pub source: serde_json::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_status() {
        let error = ApiError::from_status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(error.reason, "Not Found");
        assert_eq!(error.status_code, 404);
        assert!(error.is_not_found());
        assert!(error.is_client_error());
        assert!(!error.is_server_error());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new("Internal Server Error", 500);
        assert_eq!(error.to_string(), "Internal Server Error (status 500)");
        assert!(error.is_server_error());
    }

    #[test]
    fn test_unknown_response_keeps_raw_body() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = UnknownResponse {
            url: "https://api.coingecko.com/api/v3/ping".to_string(),
            status_code: 200,
            body: "<html>".to_string(),
            source,
        };

        assert_eq!(error.body, "<html>");
        assert_eq!(
            error.to_string(),
            "https://api.coingecko.com/api/v3/ping returned an undecodable body (status 200)"
        );
    }
}
