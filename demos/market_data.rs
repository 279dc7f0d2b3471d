//! Example: Fetching market data from CoinGecko.
//!
//! This example demonstrates the main endpoint groups: simple prices,
//! market listings with extra query parameters, historical charts and
//! trending searches. Responses are raw JSON values.
//!
//! Run with: cargo run --example market_data

use coingecko_api_client::{CoinGeckoSession, Params};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for request logging (optional)
    tracing_subscriber::fmt::init();

    let mut session = CoinGeckoSession::new();
    let session = session.scope();

    // Get current prices for a few coins
    println!("=== Simple Price ===");
    let price = session
        .get_price("bitcoin, ethereum", "usd, eur", None)
        .await?;
    println!("BTC/USD: {}", price["bitcoin"]["usd"]);
    println!("ETH/EUR: {}", price["ethereum"]["eur"]);

    // Get the top markets, with pagination via extra parameters
    println!("\n=== Coin Markets (top 5 by market cap) ===");
    let extra = Params::from([("per_page", 5), ("page", 1)]).with("order", "market_cap_desc");
    let markets = session.get_coins_markets("usd", Some(extra)).await?;
    if let Some(rows) = markets.as_array() {
        for row in rows {
            println!(
                "{}: price={}, market_cap={}",
                row["id"], row["current_price"], row["market_cap"]
            );
        }
    }

    // Get a week of hourly chart data
    println!("\n=== Market Chart (bitcoin, 7 days) ===");
    let chart = session
        .get_coin_market_chart_by_id("bitcoin", "usd", 7, None)
        .await?;
    let points = chart["prices"].as_array().map_or(0, Vec::len);
    println!("Price points: {points}");
    if let Some(last) = chart["prices"].as_array().and_then(|p| p.last()) {
        println!("Latest: {} @ {}", last[1], last[0]);
    }

    // Get trending searches
    println!("\n=== Trending Searches ===");
    let trending = session.get_search_trending(None).await?;
    if let Some(coins) = trending["coins"].as_array() {
        for entry in coins.iter().take(3) {
            println!("{} ({})", entry["item"]["name"], entry["item"]["symbol"]);
        }
    }

    println!("\nDone!");
    Ok(())
}
