//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::rpc::RpcError;
use crate::world::WorldError;

/// Handler error: a failed ledger call, rendered as a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub RpcError);

impl From<RpcError> for ApiError {
    fn from(err: RpcError) -> Self {
        Self(err)
    }
}

/// Status code for a ledger failure.
///
/// Unreachable endpoint → 503, bad upstream answer → 502, JSON-RPC error → 400.
pub fn status_for(err: &RpcError) -> StatusCode {
    match err {
        RpcError::Transport(_) | RpcError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
        RpcError::Upstream { .. } | RpcError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        RpcError::Rpc(_) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let body = match &self.0 {
            RpcError::Rpc(payload) => json!({
                "error": self.0.to_string(),
                "detail": payload,
            }),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Errors raised while assembling the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
