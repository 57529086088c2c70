//! Benchmarks for request signing

use bybit_relay::exchange::{canonical_string, sign};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn order_params() -> Vec<(&'static str, String)> {
    vec![
        ("symbol", "BTCUSDT".to_string()),
        ("side", "Buy".to_string()),
        ("leverage", "10".to_string()),
        ("order_type", "Market".to_string()),
        ("qty", "0.25".to_string()),
        ("time_in_force", "GoodTillCancel".to_string()),
        ("timestamp", "1700000000000".to_string()),
    ]
}

fn benchmark_canonical_string(c: &mut Criterion) {
    let params = order_params();

    c.bench_function("canonical_string", |b| {
        b.iter(|| canonical_string(black_box(&params)))
    });
}

fn benchmark_sign(c: &mut Criterion) {
    let params = order_params();

    c.bench_function("sign_order_params", |b| {
        b.iter(|| sign(black_box("bench-secret"), black_box(&params)))
    });
}

criterion_group!(benches, benchmark_canonical_string, benchmark_sign);
criterion_main!(benches);
