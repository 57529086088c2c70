//! End-to-end integration tests

use bybit_relay::config::Config;

#[test]
fn test_config_example_parses() {
    let toml = r#"
        [server]
        bind_addr = "0.0.0.0:8080"

        [exchange]
        base_url = "https://api.bybit.com/v2/private"
        quote_currency = "USDT"
        timeout_secs = 10

        [sizing]
        qty_step = 0.001

        [telemetry]
        metrics_port = 9090
        log_level = "info"
    "#;

    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.exchange.quote_currency, "USDT");
}
