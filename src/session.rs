//! CoinGecko API transport session implementation.

use std::ops::Deref;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::endpoints::API_BASE_URL;
use crate::error::{ApiError, CoinGeckoError, UnknownResponse};
use crate::params::Params;

/// Header carrying the CoinGecko demo API key.
pub const DEMO_API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// The CoinGecko REST API session.
///
/// A session either owns its connection pool or borrows one supplied at
/// construction. An owned pool is created lazily by [`start()`](Self::start)
/// or [`scope()`](Self::scope) and released again by
/// [`close()`](Self::close); a borrowed pool is used as-is and never closed
/// by the session, so several sessions can share it.
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
///     let ping = session.ping().await?;
///     println!("Ping: {ping}");
///
///     Ok(())
/// }
/// ```
///
/// To share one pool between sessions, pass it to the builder:
///
/// ```rust,no_run
/// use coingecko_api_client::{CoinGeckoSession, build_pool};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = build_pool(None);
///     let session = CoinGeckoSession::builder().pool(pool).build();
///
///     let currencies = session.get_supported_vs_currencies(None).await?;
///     println!("{currencies}");
///
///     Ok(())
/// }
/// ```
pub struct CoinGeckoSession {
    http: Option<ClientWithMiddleware>,
    owns_pool: bool,
    base_url: String,
    demo_api_key: Option<SecretString>,
    user_agent: Option<String>,
}

impl CoinGeckoSession {
    /// Create a new session that owns its connection pool.
    ///
    /// The pool is not created yet; call [`start()`](Self::start) or enter a
    /// [`scope()`](Self::scope) before sending requests. Use
    /// [`CoinGeckoSession::builder()`] to configure an API key, base URL or
    /// shared pool.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new session builder.
    pub fn builder() -> CoinGeckoSessionBuilder {
        CoinGeckoSessionBuilder::new()
    }

    /// Start the session.
    ///
    /// Creates the owned connection pool if the session owns one and none is
    /// active yet. For sessions built around a borrowed pool this is a
    /// no-op. Calling it twice is safe.
    pub fn start(&mut self) {
        if self.owns_pool && self.http.is_none() {
            self.http = Some(build_pool(self.user_agent.as_deref()));
            tracing::debug!("Created owned connection pool");
        }
    }

    /// Close the session.
    ///
    /// Releases the owned connection pool, dropping its connections. A
    /// borrowed pool is left untouched. Safe to call before
    /// [`start()`](Self::start) or more than once.
    pub fn close(&mut self) {
        if self.owns_pool && self.http.take().is_some() {
            tracing::debug!("Closed owned connection pool");
        }
    }

    /// Start the session and return a guard that closes it when dropped.
    ///
    /// The guard dereferences to the session, so requests can be made
    /// through it directly.
    pub fn scope(&mut self) -> SessionScope<'_> {
        self.start();
        SessionScope { session: self }
    }

    /// Whether a connection pool is currently available for requests.
    pub fn is_active(&self) -> bool {
        self.http.is_some()
    }

    /// Make a GET request against an API route and return the decoded JSON.
    ///
    /// `route` is relative to the session base URL. Query parameters are
    /// sent as given; the payload comes back as untyped JSON, exactly as the
    /// API returned it.
    ///
    /// # Errors
    ///
    /// [`CoinGeckoError::NoSession`] if no pool is active,
    /// [`CoinGeckoError::Api`] for error statuses,
    /// [`CoinGeckoError::RateLimitExceeded`] for 429 responses, and
    /// [`CoinGeckoError::UnknownResponse`] if a success response carries a
    /// body that is not JSON.
    pub async fn request(&self, route: &str, params: &Params) -> Result<Value, CoinGeckoError> {
        let http = self.http.as_ref().ok_or(CoinGeckoError::NoSession)?;

        let url = format!("{}{}", self.base_url, route);
        let mut request = http.get(&url).header(CONTENT_TYPE, "application/json");
        if let Some(api_key) = &self.demo_api_key {
            request = request.header(DEMO_API_KEY_HEADER, api_key.expose_secret());
        }
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Parse a response from the CoinGecko API.
    async fn parse_response(&self, response: reqwest::Response) -> Result<Value, CoinGeckoError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_ms = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .map(|seconds| seconds.saturating_mul(1000));
            tracing::warn!("Rate limit exceeded, retry after {:?}ms", retry_after_ms);
            return Err(CoinGeckoError::RateLimitExceeded { retry_after_ms });
        }

        if !status.is_success() {
            return Err(CoinGeckoError::Api(ApiError::from_status(status)));
        }

        let url = response.url().to_string();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| {
            CoinGeckoError::UnknownResponse(UnknownResponse {
                url,
                status_code: status.as_u16(),
                body,
                source,
            })
        })
    }
}

impl Default for CoinGeckoSession {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinGeckoSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoSession")
            .field("base_url", &self.base_url)
            .field("active", &self.http.is_some())
            .field("owns_pool", &self.owns_pool)
            .field("has_api_key", &self.demo_api_key.is_some())
            .finish()
    }
}

/// Guard over a started [`CoinGeckoSession`] that closes it on drop.
#[derive(Debug)]
pub struct SessionScope<'a> {
    session: &'a mut CoinGeckoSession,
}

impl Deref for SessionScope<'_> {
    type Target = CoinGeckoSession;

    fn deref(&self) -> &Self::Target {
        self.session
    }
}

impl Drop for SessionScope<'_> {
    fn drop(&mut self) {
        self.session.close();
    }
}

/// Builder for [`CoinGeckoSession`].
pub struct CoinGeckoSessionBuilder {
    base_url: String,
    demo_api_key: Option<SecretString>,
    pool: Option<ClientWithMiddleware>,
    user_agent: Option<String>,
}

impl CoinGeckoSessionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            demo_api_key: None,
            pool: None,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// Routes are appended by concatenation, so the URL must end with a
    /// slash.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the demo API key sent with every request.
    pub fn demo_api_key(mut self, key: impl Into<String>) -> Self {
        self.demo_api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Borrow an existing connection pool instead of owning one.
    ///
    /// The session will use the pool immediately and never close it;
    /// [`CoinGeckoSession::start()`] and [`CoinGeckoSession::close()`]
    /// become no-ops.
    pub fn pool(mut self, pool: ClientWithMiddleware) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Set a custom user agent for the owned connection pool.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the session.
    pub fn build(self) -> CoinGeckoSession {
        let owns_pool = self.pool.is_none();
        CoinGeckoSession {
            http: self.pool,
            owns_pool,
            base_url: self.base_url,
            demo_api_key: self.demo_api_key,
            user_agent: self.user_agent,
        }
    }
}

impl Default for CoinGeckoSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a connection pool with the middleware stack used for owned
/// sessions.
///
/// Call this to create one pool up front and share it between several
/// sessions via [`CoinGeckoSessionBuilder::pool()`].
pub fn build_pool(user_agent: Option<&str>) -> ClientWithMiddleware {
    // Build default headers.
    let mut headers = HeaderMap::new();
    let user_agent = user_agent
        .map(str::to_string)
        .unwrap_or_else(|| format!("coingecko-api-client/{}", env!("CARGO_PKG_VERSION")));
    let header_value = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("coingecko-api-client"));
    headers.insert(USER_AGENT, header_value);

    let reqwest_client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    ClientBuilder::new(reqwest_client)
        .with(TracingMiddleware::default())
        .build()
}
