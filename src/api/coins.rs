//! Coin data endpoints.

use serde_json::Value;

use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::{ParamValue, Params};
use crate::session::CoinGeckoSession;

impl CoinGeckoSession {
    /// List all supported coins with id, name and symbol.
    pub async fn get_coins_list(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::COINS_LIST, &extra.unwrap_or_default())
            .await
    }

    /// List all supported coins with price, market cap, volume and market
    /// related data.
    ///
    /// # Arguments
    ///
    /// * `vs_currency` - Target currency of the market data (usd, eur, ...).
    /// * `extra` - Additional query parameters (e.g., `per_page`, `page`).
    pub async fn get_coins_markets(
        &self,
        vs_currency: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        let params = extra.unwrap_or_default().with("vs_currency", vs_currency);
        self.request(endpoints::COINS_MARKETS, &params).await
    }

    /// Get current data for a coin, including exchange tickers.
    ///
    /// # Arguments
    ///
    /// * `coin_id` - Coin id (can be obtained from [`get_coins_list()`](Self::get_coins_list)).
    /// * `extra` - Additional query parameters.
    pub async fn get_coin_by_id(
        &self,
        coin_id: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(&endpoints::coin_detail(coin_id), &extra.unwrap_or_default())
            .await
    }

    /// Get coin tickers, paginated to 100 items.
    pub async fn get_coin_ticker_by_id(
        &self,
        coin_id: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(&endpoints::coin_tickers(coin_id), &extra.unwrap_or_default())
            .await
    }

    /// Get historical data for a coin at a given date.
    ///
    /// # Arguments
    ///
    /// * `coin_id` - Coin id.
    /// * `date` - Date of the data snapshot in dd-mm-yyyy (e.g., "30-12-2017").
    /// * `extra` - Additional query parameters.
    pub async fn get_coin_history_by_id(
        &self,
        coin_id: &str,
        date: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        let params = extra.unwrap_or_default().with("date", date);
        self.request(&endpoints::coin_history(coin_id), &params).await
    }

    /// Get historical market data for a coin, including price, market cap
    /// and 24h volume.
    ///
    /// # Arguments
    ///
    /// * `coin_id` - Coin id.
    /// * `vs_currency` - Target currency of the market data.
    /// * `days` - Data up to this many days ago (e.g., `14` or `"max"`).
    /// * `extra` - Additional query parameters.
    pub async fn get_coin_market_chart_by_id(
        &self,
        coin_id: &str,
        vs_currency: &str,
        days: impl Into<ParamValue>,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        let params = extra
            .unwrap_or_default()
            .with("vs_currency", vs_currency)
            .with("days", days);
        self.request(&endpoints::coin_market_chart(coin_id), &params)
            .await
    }

    /// Get historical market data for a coin within a range of timestamps.
    ///
    /// # Arguments
    ///
    /// * `coin_id` - Coin id.
    /// * `vs_currency` - Target currency of the market data.
    /// * `from_timestamp` - Range start as a UNIX timestamp (e.g., 1392577232).
    /// * `to_timestamp` - Range end as a UNIX timestamp (e.g., 1422577232).
    /// * `extra` - Additional query parameters.
    pub async fn get_coin_market_chart_range_by_id(
        &self,
        coin_id: &str,
        vs_currency: &str,
        from_timestamp: u64,
        to_timestamp: u64,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        let params = extra
            .unwrap_or_default()
            .with("vs_currency", vs_currency)
            .with("from", from_timestamp)
            .with("to", to_timestamp);
        self.request(&endpoints::coin_market_chart_range(coin_id), &params)
            .await
    }

    /// Get status updates for a coin.
    pub async fn get_coin_status_updates_by_id(
        &self,
        coin_id: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            &endpoints::coin_status_updates(coin_id),
            &extra.unwrap_or_default(),
        )
        .await
    }

    /// Get OHLC candles for a coin.
    ///
    /// # Arguments
    ///
    /// * `coin_id` - Coin id.
    /// * `vs_currency` - Target currency of the market data.
    /// * `days` - Data up to this many days ago (1/7/14/30/90/180/365/max).
    /// * `extra` - Additional query parameters.
    pub async fn get_coin_ohlc_by_id(
        &self,
        coin_id: &str,
        vs_currency: &str,
        days: impl Into<ParamValue>,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        let params = extra
            .unwrap_or_default()
            .with("vs_currency", vs_currency)
            .with("days", days);
        self.request(&endpoints::coin_ohlc(coin_id), &params).await
    }

    /// List all coin categories.
    pub async fn get_coins_categories_list(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::COINS_CATEGORIES_LIST, &extra.unwrap_or_default())
            .await
    }

    /// List all coin categories with market data.
    pub async fn get_coins_categories(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::COINS_CATEGORIES, &extra.unwrap_or_default())
            .await
    }
}
