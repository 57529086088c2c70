//! Prometheus metrics

use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Wallet balance fetch latency
    BalanceFetch,
    /// Order submission latency
    OrderSubmission,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Alerts received on the webhook
    AlertsReceived,
    /// Alerts rejected at validation
    AlertsRejected,
    /// Orders accepted by the exchange
    OrdersSubmitted,
    /// Orders that failed downstream
    OrdersFailed,
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::BalanceFetch => "relay_balance_fetch_latency_ms",
        LatencyMetric::OrderSubmission => "relay_order_submission_latency_ms",
    };

    metrics::histogram!(metric_name).record(duration.as_millis() as f64);
}

/// Increment a counter
pub fn increment_counter(metric: CounterMetric) {
    let metric_name = match metric {
        CounterMetric::AlertsReceived => "relay_alerts_received_total",
        CounterMetric::AlertsRejected => "relay_alerts_rejected_total",
        CounterMetric::OrdersSubmitted => "relay_orders_submitted_total",
        CounterMetric::OrdersFailed => "relay_orders_failed_total",
    };

    metrics::counter!(metric_name).increment(1);
}
