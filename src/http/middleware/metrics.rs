//! Request metrics middleware.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::observability::metrics;

/// Record count and latency per matched route template, so
/// `/assets/0xabc` and `/assets/0xdef` share the `/assets/{wallet}` series.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;
    metrics::record_request(&route, response.status().as_u16(), start);
    response
}
