//! Example: Checking CoinGecko API availability.
//!
//! Run with: cargo run --example ping

use coingecko_api_client::CoinGeckoSession;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = CoinGeckoSession::new();
    let session = session.scope();

    let ping = session.ping().await?;
    println!("CoinGecko says: {}", ping["gecko_says"]);

    Ok(())
}
