//! Ledger RPC error definitions and the JSON-RPC envelope.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while calling the ledger node.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Endpoint unreachable (connection refused, DNS failure, reset).
    #[error("RPC transport error: {0}")]
    Transport(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Endpoint answered with a non-success HTTP status.
    #[error("RPC endpoint returned HTTP {status}")]
    Upstream { status: u16, body: String },

    /// Endpoint answered 2xx but the body is not a JSON-RPC response.
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    /// Well-formed JSON-RPC error object.
    #[error("RPC error: {0}")]
    Rpc(Value),
}

impl RpcError {
    /// Transient failures the caller may retry. RPC-level errors are
    /// semantic and are never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RpcError::Transport(_) | RpcError::Timeout(_))
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RpcError::Transport(_) => "transport",
            RpcError::Timeout(_) => "timeout",
            RpcError::Upstream { .. } => "upstream",
            RpcError::InvalidResponse(_) => "invalid_response",
            RpcError::Rpc(_) => "rpc",
        }
    }
}

/// Result type for ledger RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a [Value],
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: &'a [Value]) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }
}
