//! # CoinGecko Client
//!
//! An async Rust client library for the CoinGecko cryptocurrency market-data
//! REST API (v3).
//!
//! ## Features
//!
//! - Every public v3 endpoint, from simple prices to derivatives and global
//!   market data
//! - Raw JSON responses, returned exactly as the API sent them
//! - Deterministic connection pool lifecycle with scoped acquisition, and
//!   support for sharing one pool between sessions
//! - Demo API key support via the `x-cg-demo-api-key` header
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coingecko_api_client::CoinGeckoSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = CoinGeckoSession::new();
//!     let session = session.scope();
//!
//!     let price = session.get_price("bitcoin, ethereum", "usd", None).await?;
//!     println!("{price:#}");
//!
//!     Ok(())
//! }
//! ```

mod api;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod session;

// Re-export commonly used types at crate root
pub use error::{ApiError, CoinGeckoError, UnknownResponse};
pub use params::{ParamValue, Params};
pub use session::{CoinGeckoSession, CoinGeckoSessionBuilder, SessionScope, build_pool};

/// Result type alias using CoinGeckoError
pub type Result<T> = std::result::Result<T, CoinGeckoError>;
