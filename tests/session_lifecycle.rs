use serde_json::Value;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coingecko_api_client::{CoinGeckoError, CoinGeckoSession, build_pool};

fn build_owned_session(server: &MockServer) -> CoinGeckoSession {
    CoinGeckoSession::builder()
        .base_url(format!("{}/", server.uri()))
        .build()
}

async fn mount_ping(server: &MockServer) {
    let response = serde_json::json!({ "gecko_says": "(V3) To the Moon!" });
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_request_before_start_fails_without_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = build_owned_session(&server);
    let err = session.ping().await.unwrap_err();

    assert!(matches!(err, CoinGeckoError::NoSession));
    server.verify().await;
}

#[tokio::test]
async fn test_request_after_close_fails() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let mut session = build_owned_session(&server);
    session.start();
    session.ping().await.unwrap();

    session.close();
    let err = session.ping().await.unwrap_err();
    assert!(matches!(err, CoinGeckoError::NoSession));
}

#[tokio::test]
async fn test_session_can_be_restarted() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let mut session = build_owned_session(&server);
    session.start();
    session.ping().await.unwrap();

    session.close();
    session.start();
    session.ping().await.unwrap();
}

#[tokio::test]
async fn test_borrowed_pool_stays_usable_after_close() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let pool = build_pool(None);
    let mut session = CoinGeckoSession::builder()
        .base_url(format!("{}/", server.uri()))
        .pool(pool)
        .build();

    // No start() needed, the borrowed pool is live from construction.
    session.ping().await.unwrap();

    session.close();
    session.ping().await.unwrap();
}

#[tokio::test]
async fn test_sessions_can_share_one_pool() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let pool = build_pool(None);
    let first = CoinGeckoSession::builder()
        .base_url(format!("{}/", server.uri()))
        .pool(pool.clone())
        .build();
    let mut second = CoinGeckoSession::builder()
        .base_url(format!("{}/", server.uri()))
        .pool(pool)
        .build();

    first.ping().await.unwrap();
    second.ping().await.unwrap();

    // Closing one borrower must not affect the other.
    second.close();
    first.ping().await.unwrap();
}

#[tokio::test]
async fn test_scope_closes_session_on_success_path() {
    let server = MockServer::start().await;
    mount_ping(&server).await;

    let mut session = build_owned_session(&server);
    {
        let session = session.scope();
        session.ping().await.unwrap();
    }

    assert!(!session.is_active());
}

#[tokio::test]
async fn test_scope_closes_session_on_error_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    async fn fetch(session: &mut CoinGeckoSession) -> Result<Value, CoinGeckoError> {
        let session = session.scope();
        let value = session.ping().await?;
        Ok(value)
    }

    let mut session = build_owned_session(&server);
    let result = fetch(&mut session).await;

    assert!(result.is_err());
    assert!(!session.is_active());
}

#[tokio::test]
async fn test_concurrent_requests_share_the_session() {
    let server = MockServer::start().await;
    mount_ping(&server).await;
    Mock::given(method("GET"))
        .and(path("/simple/supported_vs_currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["usd", "eur"])))
        .mount(&server)
        .await;

    let mut session = build_owned_session(&server);
    let session = session.scope();

    let (ping, currencies) = tokio::join!(session.ping(), session.get_supported_vs_currencies(None));

    assert_eq!(ping.unwrap()["gecko_says"], "(V3) To the Moon!");
    assert_eq!(currencies.unwrap(), serde_json::json!(["usd", "eur"]));
}
