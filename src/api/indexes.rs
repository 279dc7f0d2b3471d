//! Market index endpoints.

use serde_json::Value;

use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;
use crate::session::CoinGeckoSession;

impl CoinGeckoSession {
    /// List all market indexes.
    pub async fn get_indexes(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::INDEXES, &extra.unwrap_or_default())
            .await
    }

    /// Get a market index by market id and index id.
    ///
    /// # Arguments
    ///
    /// * `market_id` - Market id (can be obtained from the exchanges list).
    /// * `index_id` - Index id (can be obtained from
    ///   [`get_indexes_list()`](Self::get_indexes_list)).
    /// * `extra` - Additional query parameters.
    pub async fn get_index_by_market_id_and_index_id(
        &self,
        market_id: &str,
        index_id: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            &endpoints::index_detail(market_id, index_id),
            &extra.unwrap_or_default(),
        )
        .await
    }

    /// List market index ids and names.
    pub async fn get_indexes_list(&self, extra: Option<Params>) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::INDEXES_LIST, &extra.unwrap_or_default())
            .await
    }
}
