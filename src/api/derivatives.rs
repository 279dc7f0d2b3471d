//! Derivatives endpoints.

use serde_json::Value;

use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;
use crate::session::CoinGeckoSession;

impl CoinGeckoSession {
    /// List all derivative tickers.
    pub async fn get_derivatives(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::DERIVATIVES, &extra.unwrap_or_default())
            .await
    }

    /// List all derivative exchanges with data.
    pub async fn get_derivatives_exchanges(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::DERIVATIVES_EXCHANGES, &extra.unwrap_or_default())
            .await
    }

    /// Get derivative exchange data.
    ///
    /// # Arguments
    ///
    /// * `exchange_id` - Exchange id (can be obtained from
    ///   [`get_derivatives_exchanges_list()`](Self::get_derivatives_exchanges_list)),
    ///   e.g. "bitmex".
    /// * `extra` - Additional query parameters.
    pub async fn get_derivatives_exchanges_by_id(
        &self,
        exchange_id: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            &endpoints::derivatives_exchange_detail(exchange_id),
            &extra.unwrap_or_default(),
        )
        .await
    }

    /// List all derivative exchange ids and names.
    pub async fn get_derivatives_exchanges_list(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            endpoints::DERIVATIVES_EXCHANGES_LIST,
            &extra.unwrap_or_default(),
        )
        .await
    }
}
