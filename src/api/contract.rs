//! Token contract endpoints.

use serde_json::Value;

use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::{ParamValue, Params};
use crate::session::CoinGeckoSession;

impl CoinGeckoSession {
    /// Get current data for a token by contract address.
    ///
    /// # Arguments
    ///
    /// * `platform_id` - Asset platform id (see the asset platforms
    ///   endpoint for options).
    /// * `contract_address` - The token's contract address.
    /// * `extra` - Additional query parameters.
    pub async fn get_coin_info_from_contract_address(
        &self,
        platform_id: &str,
        contract_address: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            &endpoints::contract_info(platform_id, contract_address),
            &extra.unwrap_or_default(),
        )
        .await
    }

    /// Get historical market data for a token by contract address.
    ///
    /// # Arguments
    ///
    /// * `platform_id` - Asset platform id.
    /// * `contract_address` - The token's contract address.
    /// * `vs_currency` - Target currency of the market data.
    /// * `days` - Data up to this many days ago (e.g., `14` or `"max"`).
    /// * `extra` - Additional query parameters.
    pub async fn get_coin_market_chart_from_contract_address(
        &self,
        platform_id: &str,
        contract_address: &str,
        vs_currency: &str,
        days: impl Into<ParamValue>,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        let params = extra
            .unwrap_or_default()
            .with("vs_currency", vs_currency)
            .with("days", days);
        self.request(
            &endpoints::contract_market_chart(platform_id, contract_address),
            &params,
        )
        .await
    }

    /// Get historical market data for a token within a range of timestamps.
    ///
    /// # Arguments
    ///
    /// * `platform_id` - Asset platform id.
    /// * `contract_address` - The token's contract address.
    /// * `vs_currency` - Target currency of the market data.
    /// * `from_timestamp` - Range start as a UNIX timestamp.
    /// * `to_timestamp` - Range end as a UNIX timestamp.
    /// * `extra` - Additional query parameters.
    pub async fn get_coin_market_chart_range_from_contract_address(
        &self,
        platform_id: &str,
        contract_address: &str,
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
        self.request(
            &endpoints::contract_market_chart_range(platform_id, contract_address),
            &params,
        )
        .await
    }
}
