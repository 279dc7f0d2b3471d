//! Example: Working with CoinGeckoError.
//!
//! Demonstrates the session precondition error and how to match the error
//! taxonomy. Runs entirely offline.
//!
//! Run with: cargo run --example error_handling

use coingecko_api_client::{ApiError, CoinGeckoError, CoinGeckoSession};

#[tokio::main]
async fn main() {
    // A session that owns its pool cannot send requests before start().
    let session = CoinGeckoSession::new();
    match session.ping().await {
        Err(CoinGeckoError::NoSession) => {
            println!("No session yet: call start() or use scope() first");
        }
        other => println!("Unexpected outcome: {other:?}"),
    }

    // API errors carry the status line for matching.
    let api_error = ApiError::new("Not Found", 404);
    println!("API error: {api_error}");
    println!("Is not found: {}", api_error.is_not_found());
    println!("Is client error: {}", api_error.is_client_error());

    let err = CoinGeckoError::Api(api_error);
    match err {
        CoinGeckoError::NoSession => println!("Fix your setup: no live session"),
        CoinGeckoError::Api(inner) if inner.is_server_error() => {
            println!("Server-side failure: {inner}");
        }
        CoinGeckoError::Api(inner) => println!("Server rejected the call: {inner}"),
        CoinGeckoError::RateLimitExceeded { retry_after_ms } => {
            println!("Rate limited, retry after {retry_after_ms:?}ms");
        }
        CoinGeckoError::UnknownResponse(unknown) => {
            println!("Undecodable body from {}: {}", unknown.url, unknown.body);
        }
        other => println!("Transport failure: {other}"),
    }
}
