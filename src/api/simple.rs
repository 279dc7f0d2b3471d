//! Ping and simple price endpoints.

use serde_json::Value;

use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;
use crate::session::CoinGeckoSession;

impl CoinGeckoSession {
    /// Check API server status.
    pub async fn ping(&self) -> Result<Value, CoinGeckoError> {
        self.request(endpoints::PING, &Params::new()).await
    }

    /// Get the current price of coins in other supported currencies.
    ///
    /// Internal whitespace is stripped from both lists, so
    /// `"bitcoin, ethereum"` is sent as `bitcoin,ethereum`.
    ///
    /// # Arguments
    ///
    /// * `ids` - Coin ids, comma-separated for more than one coin.
    /// * `vs_currencies` - Target currencies, comma-separated.
    /// * `extra` - Additional query parameters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::CoinGeckoSession;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let mut session = CoinGeckoSession::new();
    ///     let session = session.scope();
    ///
    ///     let price = session.get_price("bitcoin", "usd", None).await?;
    ///     println!("{}", price["bitcoin"]["usd"]);
    ///
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_price(
        &self,
        ids: &str,
        vs_currencies: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        let params = extra
            .unwrap_or_default()
            .with("ids", ids.replace(' ', ""))
            .with("vs_currencies", vs_currencies.replace(' ', ""));
        self.request(endpoints::SIMPLE_PRICE, &params).await
    }

    /// Get the current price of tokens on a platform by contract address.
    ///
    /// Internal whitespace is stripped from both comma-separated lists.
    ///
    /// # Arguments
    ///
    /// * `platform_id` - Id of the platform issuing the tokens (see the
    ///   asset platforms endpoint for options).
    /// * `contract_addresses` - Token contract addresses, comma-separated.
    /// * `vs_currencies` - Target currencies, comma-separated.
    /// * `extra` - Additional query parameters.
    pub async fn get_token_price(
        &self,
        platform_id: &str,
        contract_addresses: &str,
        vs_currencies: &str,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        let params = extra
            .unwrap_or_default()
            .with("contract_addresses", contract_addresses.replace(' ', ""))
            .with("vs_currencies", vs_currencies.replace(' ', ""));
        self.request(&endpoints::simple_token_price(platform_id), &params)
            .await
    }

    /// List all supported vs currencies.
    pub async fn get_supported_vs_currencies(
        &self,
        extra: Option<Params>,
    ) -> Result<Value, CoinGeckoError> {
        self.request(
            endpoints::SIMPLE_SUPPORTED_VS_CURRENCIES,
            &extra.unwrap_or_default(),
        )
        .await
    }
}
