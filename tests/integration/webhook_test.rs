//! Webhook server integration tests
//!
//! Boots the real router on a local port and drives it over HTTP with a
//! mocked exchange upstream.

use bybit_relay::config::ExchangeConfig;
use bybit_relay::exchange::ExchangeGateway;
use bybit_relay::relay::AlertHandler;
use bybit_relay::risk::PositionSizer;
use bybit_relay::server::build_router;

async fn spawn_app(exchange_url: String) -> String {
    let handler = AlertHandler::new(
        ExchangeGateway::new(ExchangeConfig {
            base_url: exchange_url,
            quote_currency: "USDT".to_string(),
            timeout_secs: 5,
        }),
        PositionSizer::new(None),
        "USDT".to_string(),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(handler)).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_webhook_relays_order_end_to_end() {
    let mut exchange = mockito::Server::new_async().await;
    exchange
        .mock("POST", "/order/create")
        .with_status(200)
        .with_body(r#"{"result":{"order_id":"1"}}"#)
        .create_async()
        .await;

    let app_url = spawn_app(exchange.url()).await;

    let response = reqwest::Client::new()
        .post(&app_url)
        .json(&serde_json::json!({
            "api_key": "key",
            "secret_key": "secret",
            "symbol": "BTCUSDT",
            "action": "open_long",
            "qty": 1,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "order submitted");
}

#[tokio::test]
async fn test_webhook_rejects_bad_alert_without_upstream() {
    let mut exchange = mockito::Server::new_async().await;
    let order_mock = exchange
        .mock("POST", "/order/create")
        .expect(0)
        .create_async()
        .await;

    let app_url = spawn_app(exchange.url()).await;

    let response = reqwest::Client::new()
        .post(&app_url)
        .body("{\"symbol\":\"\"}")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    order_mock.assert_async().await;
}

#[tokio::test]
async fn test_health_endpoint() {
    let app_url = spawn_app("http://unused".to_string()).await;

    let response = reqwest::get(format!("{}/health", app_url)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
