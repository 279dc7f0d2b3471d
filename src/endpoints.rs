//! CoinGecko REST API route constants.
//!
//! Routes are relative to [`API_BASE_URL`] and joined by plain concatenation,
//! so the base ends with a slash and routes do not start with one. Routes
//! with path parameters are built by the functions below; the exact shapes,
//! including trailing slashes where present, match the upstream API.

/// Base URL for the CoinGecko v3 REST API.
pub const API_BASE_URL: &str = "https://api.coingecko.com/api/v3/";

// Simple endpoints

/// Check API server status.
pub const PING: &str = "ping";
/// Get the current price of coins in other currencies.
pub const SIMPLE_PRICE: &str = "simple/price";
/// List all supported vs currencies.
pub const SIMPLE_SUPPORTED_VS_CURRENCIES: &str = "simple/supported_vs_currencies";

/// Get the current price of tokens on a platform by contract address.
pub fn simple_token_price(platform_id: &str) -> String {
    format!("simple/token_price/{platform_id}")
}

// Coins endpoints

/// List all supported coins.
pub const COINS_LIST: &str = "coins/list";
/// List coins with market data.
pub const COINS_MARKETS: &str = "coins/markets";
/// List all coin categories.
pub const COINS_CATEGORIES_LIST: &str = "coins/categories/list";
/// List all coin categories with market data.
pub const COINS_CATEGORIES: &str = "coins/categories";

/// Get current data for a coin.
pub fn coin_detail(coin_id: &str) -> String {
    format!("coins/{coin_id}/")
}

/// Get coin tickers.
pub fn coin_tickers(coin_id: &str) -> String {
    format!("coins/{coin_id}/tickers")
}

/// Get historical data for a coin at a date.
pub fn coin_history(coin_id: &str) -> String {
    format!("coins/{coin_id}/history")
}

/// Get historical market data for a coin.
pub fn coin_market_chart(coin_id: &str) -> String {
    format!("coins/{coin_id}/market_chart")
}

/// Get historical market data for a coin within a time range.
pub fn coin_market_chart_range(coin_id: &str) -> String {
    format!("coins/{coin_id}/market_chart/range")
}

/// Get status updates for a coin.
pub fn coin_status_updates(coin_id: &str) -> String {
    format!("coins/{coin_id}/status_updates")
}

/// Get OHLC candles for a coin.
pub fn coin_ohlc(coin_id: &str) -> String {
    format!("coins/{coin_id}/ohlc")
}

// Contract endpoints

/// Get current data for a token by contract address.
pub fn contract_info(platform_id: &str, contract_address: &str) -> String {
    format!("coins/{platform_id}/contract/{contract_address}")
}

/// Get historical market data for a token by contract address.
pub fn contract_market_chart(platform_id: &str, contract_address: &str) -> String {
    format!("coins/{platform_id}/contract/{contract_address}/market_chart/")
}

/// Get historical market data for a token within a time range.
pub fn contract_market_chart_range(platform_id: &str, contract_address: &str) -> String {
    format!("coins/{platform_id}/contract/{contract_address}/market_chart/range")
}

// Asset platform endpoints

/// List all asset platforms.
pub const ASSET_PLATFORMS: &str = "asset_platforms";

// Exchange endpoints

/// List all exchanges with data.
pub const EXCHANGES: &str = "exchanges";
/// List all exchange ids and names.
pub const EXCHANGES_LIST: &str = "exchanges/list";

/// Get exchange volume and tickers.
pub fn exchange_detail(exchange_id: &str) -> String {
    format!("exchanges/{exchange_id}")
}

/// Get exchange tickers.
pub fn exchange_tickers(exchange_id: &str) -> String {
    format!("exchanges/{exchange_id}/tickers")
}

/// Get status updates for an exchange.
pub fn exchange_status_updates(exchange_id: &str) -> String {
    format!("exchanges/{exchange_id}/status_updates")
}

/// Get exchange volume chart data.
pub fn exchange_volume_chart(exchange_id: &str) -> String {
    format!("exchanges/{exchange_id}/volume_chart")
}

// Finance endpoints

/// List all finance platforms.
pub const FINANCE_PLATFORMS: &str = "finance_platforms";
/// List all finance products.
pub const FINANCE_PRODUCTS: &str = "finance_products";

// Index endpoints

/// List all market indexes.
pub const INDEXES: &str = "indexes";
/// List market index ids and names.
pub const INDEXES_LIST: &str = "indexes/list";

/// Get a market index on a market.
pub fn index_detail(market_id: &str, index_id: &str) -> String {
    format!("indexes/{market_id}/{index_id}")
}

// Derivatives endpoints

/// List all derivative tickers.
pub const DERIVATIVES: &str = "derivatives";
/// List all derivative exchanges with data.
pub const DERIVATIVES_EXCHANGES: &str = "derivatives/exchanges";
/// List all derivative exchange ids and names.
pub const DERIVATIVES_EXCHANGES_LIST: &str = "derivatives/exchanges/list";

/// Get derivative exchange data.
pub fn derivatives_exchange_detail(exchange_id: &str) -> String {
    format!("derivatives/exchanges/{exchange_id}")
}

// Status update endpoints

/// List all status updates.
pub const STATUS_UPDATES: &str = "status_updates";

// Event endpoints

/// List all events.
pub const EVENTS: &str = "events";
/// List all event countries.
pub const EVENTS_COUNTRIES: &str = "events/countries";
/// List all event types.
pub const EVENTS_TYPES: &str = "events/types";

// Exchange rate endpoints

/// Get BTC exchange rates.
pub const EXCHANGE_RATES: &str = "exchange_rates";

// Search endpoints

/// Get trending search coins.
pub const SEARCH_TRENDING: &str = "search/trending";

// Global endpoints

/// Get global cryptocurrency data.
pub const GLOBAL: &str = "global";
/// Get global decentralized finance data.
pub const GLOBAL_DEFI: &str = "global/decentralized_finance_defi";

// Company endpoints

/// Get public companies holdings for a coin.
pub fn companies_public_treasury(coin_id: &str) -> String {
    format!("companies/public_treasury/{coin_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_with_path_parameters() {
        assert_eq!(coin_detail("bitcoin"), "coins/bitcoin/");
        assert_eq!(coin_market_chart_range("bitcoin"), "coins/bitcoin/market_chart/range");
        assert_eq!(
            contract_market_chart("ethereum", "0xdac17f958d2ee523a2206206994597c13d831ec7"),
            "coins/ethereum/contract/0xdac17f958d2ee523a2206206994597c13d831ec7/market_chart/"
        );
        assert_eq!(index_detail("cme_futures", "btc"), "indexes/cme_futures/btc");
        assert_eq!(companies_public_treasury("bitcoin"), "companies/public_treasury/bitcoin");
    }

    #[test]
    fn test_base_url_and_routes_join_cleanly() {
        assert!(API_BASE_URL.ends_with('/'));
        for route in [PING, SIMPLE_PRICE, COINS_LIST, GLOBAL_DEFI] {
            assert!(!route.starts_with('/'));
        }
    }
}
