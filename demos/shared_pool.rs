//! Example: Sharing one connection pool between sessions.
//!
//! A session built with a borrowed pool never closes it, so several
//! sessions (for example one per API key) can reuse the same connections.
//!
//! Run with: cargo run --example shared_pool

use coingecko_api_client::{CoinGeckoSession, build_pool};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pool = build_pool(Some("shared-pool-example/0.1"));

    let mut markets_session = CoinGeckoSession::builder().pool(pool.clone()).build();
    let rates_session = CoinGeckoSession::builder().pool(pool).build();

    // Borrowed pools are live from construction, no start() needed.
    let list = markets_session.get_coins_list(None).await?;
    println!("Known coins: {}", list.as_array().map_or(0, Vec::len));

    // close() on a borrower is a no-op; the pool stays usable.
    markets_session.close();

    let rates = rates_session.get_exchange_rates(None).await?;
    println!("BTC/USD rate: {}", rates["rates"]["usd"]["value"]);

    Ok(())
}
