//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bench_requests_total` (counter): requests by method, route, status
//! - `bench_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead updates (atomic operations behind the metrics macros)
//! - The exporter runs its own listener so scrapes never contend with
//!   benchmark traffic

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    counter!(
        "bench_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "bench_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
