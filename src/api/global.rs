//! Global market data and directory endpoints.

use serde_json::Value;

use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;
use crate::session::CoinGeckoSession;

impl CoinGeckoSession {
    /// List all asset platforms (blockchain networks).
    pub async fn get_asset_platforms(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::ASSET_PLATFORMS, &extra.unwrap_or_default())
            .await
    }

    /// List all finance platforms.
    pub async fn get_finance_platforms(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::FINANCE_PLATFORMS, &extra.unwrap_or_default())
            .await
    }

    /// List all finance products.
    pub async fn get_finance_products(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::FINANCE_PRODUCTS, &extra.unwrap_or_default())
            .await
    }

    /// List all status updates with data.
    pub async fn get_status_updates(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::STATUS_UPDATES, &extra.unwrap_or_default())
            .await
    }

    /// Get events, paginated by 100.
    pub async fn get_events(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::EVENTS, &extra.unwrap_or_default())
            .await
    }

    /// Get the list of event countries.
    pub async fn get_events_countries(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::EVENTS_COUNTRIES, &extra.unwrap_or_default())
            .await
    }

    /// Get the list of event types.
    pub async fn get_events_types(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::EVENTS_TYPES, &extra.unwrap_or_default())
            .await
    }

    /// Get BTC-to-currency exchange rates.
    pub async fn get_exchange_rates(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::EXCHANGE_RATES, &extra.unwrap_or_default())
            .await
    }

    /// Get the top-7 trending coins as searched in the last 24 hours.
    pub async fn get_search_trending(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::SEARCH_TRENDING, &extra.unwrap_or_default())
            .await
    }

    /// Get global cryptocurrency data.
    pub async fn get_global(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::GLOBAL, &extra.unwrap_or_default())
            .await
    }

    /// Get global decentralized finance data.
    pub async fn get_global_decentralized_finance_defi(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::GLOBAL_DEFI, &extra.unwrap_or_default())
            .await
    }

    /// Get public companies holdings for a coin, ordered by total holdings
    /// descending.
    ///
    /// # Arguments
    ///
    /// * `coin_id` - "bitcoin" or "ethereum".
    /// * `extra` - Additional query parameters.
    pub async fn get_companies_public_treasury(
        &self,
        coin_id: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            &endpoints::companies_public_treasury(coin_id),
            &extra.unwrap_or_default(),
        )
        .await
    }
}
