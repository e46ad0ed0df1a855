//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): inbound requests by route, status
//! - `http_request_duration_seconds` (histogram): inbound latency by route
//! - `rpc_requests_total` (counter): ledger calls by method, outcome
//! - `rpc_request_duration_seconds` (histogram): ledger latency by method
//!
//! Recording is a no-op until [`init_metrics`] installs the Prometheus
//! recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled inbound request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    let route = route.to_string();
    ::metrics::counter!(
        "http_requests_total",
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("http_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record one outbound ledger RPC call.
pub fn record_rpc_call(method: &str, outcome: &'static str, start: Instant) {
    let method = method.to_string();
    ::metrics::counter!(
        "rpc_requests_total",
        "method" => method.clone(),
        "outcome" => outcome
    )
    .increment(1);
    ::metrics::histogram!("rpc_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}
