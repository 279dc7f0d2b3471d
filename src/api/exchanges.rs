//! Exchange endpoints.

use serde_json::Value;

use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;
use crate::session::CoinGeckoSession;

impl CoinGeckoSession {
    /// List all exchanges with volume and market data.
    pub async fn get_exchanges(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::EXCHANGES, &extra.unwrap_or_default())
            .await
    }

    /// List all supported exchange ids and names.
    pub async fn get_exchanges_list(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::EXCHANGES_LIST, &extra.unwrap_or_default())
            .await
    }

    /// Get exchange volume in BTC and tickers.
    ///
    /// # Arguments
    ///
    /// * `exchange_id` - Exchange id (can be obtained from
    ///   [`get_exchanges_list()`](Self::get_exchanges_list)), e.g. "binance".
    /// * `extra` - Additional query parameters.
    pub async fn get_exchanges_by_id(
        &self,
        exchange_id: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            &endpoints::exchange_detail(exchange_id),
            &extra.unwrap_or_default(),
        )
        .await
    }

    /// Get exchange tickers, paginated to 100 items per page.
    pub async fn get_exchanges_tickers_by_id(
        &self,
        exchange_id: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            &endpoints::exchange_tickers(exchange_id),
            &extra.unwrap_or_default(),
        )
        .await
    }

    /// Get status updates for an exchange.
    pub async fn get_exchanges_status_updates_by_id(
        &self,
        exchange_id: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            &endpoints::exchange_status_updates(exchange_id),
            &extra.unwrap_or_default(),
        )
        .await
    }

    /// Get volume chart data for an exchange.
    ///
    /// # Arguments
    ///
    /// * `exchange_id` - Exchange id.
    /// * `days` - Data up to this many days ago.
    /// * `extra` - Additional query parameters.
    pub async fn get_exchanges_volume_chart_by_id(
        &self,
        exchange_id: &str,
        days: u32,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        let params = extra.unwrap_or_default().with("days", days);
        self.request(&endpoints::exchange_volume_chart(exchange_id), &params)
            .await
    }
}
