use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coingecko_api_client::{CoinGeckoError, CoinGeckoSession, Params};

fn build_session(server: &MockServer) -> CoinGeckoSession {
    let mut session = CoinGeckoSession::builder()
        .base_url(format!("{}/", server.uri()))
        .build();
    session.start();
    session
}

#[tokio::test]
async fn test_ping() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "gecko_says": "(V3) To the Moon!" });

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let session = build_session(&server);
    let ping = session.ping().await.unwrap();

    assert_eq!(ping["gecko_says"], "(V3) To the Moon!");
}

#[tokio::test]
async fn test_demo_api_key_sent_as_header() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "gecko_says": "(V3) To the Moon!" });

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("x-cg-demo-api-key", "CG-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let mut session = CoinGeckoSession::builder()
        .base_url(format!("{}/", server.uri()))
        .demo_api_key("CG-test-key")
        .build();
    session.start();

    session.ping().await.unwrap();
}

#[tokio::test]
async fn test_required_params_overwrite_extras() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{ "id": "bitcoin" }]);

    Mock::given(method("GET"))
        .and(path("/coins/markets"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let session = build_session(&server);
    let extra = Params::from([("vs_currency", "eur")]).with("per_page", 10);
    let markets = session.get_coins_markets("usd", Some(extra)).await.unwrap();

    assert_eq!(markets[0]["id"], "bitcoin");
}

#[tokio::test]
async fn test_whitespace_stripped_from_id_lists() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "bitcoin": { "usd": 42000 },
        "ethereum": { "usd": 2500 }
    });

    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .and(query_param("ids", "bitcoin,ethereum"))
        .and(query_param("vs_currencies", "usd,eur"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let session = build_session(&server);
    let price = session
        .get_price("bitcoin, ethereum", "usd, eur", None)
        .await
        .unwrap();

    assert_eq!(price["bitcoin"]["usd"], 42000);
}

#[tokio::test]
async fn test_payload_returned_unmodified() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "prices": [[1_700_000_000_000i64, 42000.5], [1_700_000_060_000i64, 42001.25]],
        "market_caps": [[1_700_000_000_000i64, 820_000_000_000i64]],
        "total_volumes": [[1_700_000_000_000i64, 31_000_000_000i64]]
    });

    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("days", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let session = build_session(&server);
    let chart = session
        .get_coin_market_chart_by_id("bitcoin", "usd", 2, None)
        .await
        .unwrap();

    assert_eq!(chart, response);
}

#[tokio::test]
async fn test_error_status_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coins/doge-but-wrong/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let session = build_session(&server);
    let err = session
        .get_coin_by_id("doge-but-wrong", None)
        .await
        .unwrap_err();

    match err {
        CoinGeckoError::Api(api) => {
            assert_eq!(api.status_code, 404);
            assert_eq!(api.reason, "Not Found");
            assert!(api.is_not_found());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_maps_to_dedicated_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&server)
        .await;

    let session = build_session(&server);
    let err = session.ping().await.unwrap_err();

    match err {
        CoinGeckoError::RateLimitExceeded { retry_after_ms } => {
            assert_eq!(retry_after_ms, Some(30_000));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_without_retry_after_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let session = build_session(&server);
    let err = session.ping().await.unwrap_err();

    match err {
        CoinGeckoError::RateLimitExceeded { retry_after_ms } => {
            assert_eq!(retry_after_ms, None);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_maps_to_unknown_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!DOCTYPE html>"))
        .mount(&server)
        .await;

    let session = build_session(&server);
    let err = session.ping().await.unwrap_err();

    match err {
        CoinGeckoError::UnknownResponse(unknown) => {
            assert_eq!(unknown.status_code, 200);
            assert_eq!(unknown.body, "<!DOCTYPE html>");
            assert!(unknown.url.ends_with("/ping"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_raw_request_primitive() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "rates": { "btc": { "value": 1 } } });

    Mock::given(method("GET"))
        .and(path("/exchange_rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let session = build_session(&server);
    let rates = session
        .request("exchange_rates", &Params::new())
        .await
        .unwrap();

    assert_eq!(rates["rates"]["btc"]["value"], 1);
}
