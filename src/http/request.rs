//! Request identification.
//!
//! # Responsibilities
//! - Assign an `x-request-id` (UUID v4) to requests that arrive without one
//! - Echo the ID back on the response
//! - Open the per-request tracing span carrying the ID
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing (outermost layer)
//! - Client-supplied IDs are kept, not replaced

use axum::{extract::Request, http::HeaderName};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::Span;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Layer that fills in a missing `x-request-id`.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid)
}

/// Layer that copies `x-request-id` onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}

/// Span factory for `TraceLayer`.
pub fn make_request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
