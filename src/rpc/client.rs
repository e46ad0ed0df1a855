//! Ledger JSON-RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - POST one JSON-RPC 2.0 envelope per call to the configured endpoint
//! - Bound every call with the configured timeout
//! - Separate transport, HTTP status and RPC-level failures
//!
//! Retries are left to callers; see [`RpcError::is_retryable`].

use serde_json::Value;
use std::time::{Duration, Instant};

use crate::config::RpcConfig;
use crate::observability::metrics;
use crate::rpc::types::{RpcError, RpcRequest, RpcResult};

/// Upstream error bodies are cut to this many characters before being kept.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Thin JSON-RPC client for a Sui fullnode.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    timeout_secs: u64,
}

impl RpcClient {
    /// Create a new client for the configured endpoint.
    pub fn new(config: &RpcConfig) -> RpcResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RpcError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        tracing::info!(
            rpc_url = %config.url,
            timeout_secs = config.timeout_secs,
            "Ledger RPC client initialized"
        );

        Ok(Self {
            http,
            url: config.url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Endpoint URL this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Invoke `method` with positional `params` and return its `result`.
    ///
    /// A response that carries neither `error` nor `result` yields `Value::Null`.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> RpcResult<Value> {
        let start = Instant::now();
        let result = self.send(method, &params).await;

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        metrics::record_rpc_call(method, outcome, start);

        match &result {
            Ok(_) => tracing::debug!(
                method,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "RPC call succeeded"
            ),
            Err(e) => tracing::warn!(
                method,
                kind = e.kind(),
                error = %e,
                "RPC call failed"
            ),
        }

        result
    }

    async fn send(&self, method: &str, params: &[Value]) -> RpcResult<Value> {
        let response = self
            .http
            .post(&self.url)
            .json(&RpcRequest::new(method, params))
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::Upstream {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                RpcError::Timeout(self.timeout_secs)
            } else {
                RpcError::InvalidResponse(e.to_string())
            }
        })?;

        extract_result(body)
    }

    fn map_reqwest_error(&self, e: reqwest::Error) -> RpcError {
        if e.is_timeout() {
            RpcError::Timeout(self.timeout_secs)
        } else {
            RpcError::Transport(e.to_string())
        }
    }
}

/// Pull `result` out of a decoded JSON-RPC response body.
fn extract_result(body: Value) -> RpcResult<Value> {
    let Value::Object(mut map) = body else {
        return Err(RpcError::InvalidResponse(
            "response body is not a JSON object".to_string(),
        ));
    };

    match map.remove("error") {
        Some(Value::Null) | None => {}
        Some(error) => return Err(RpcError::Rpc(error)),
    }

    Ok(map.remove("result").unwrap_or(Value::Null))
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("rpc_url", &self.url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
