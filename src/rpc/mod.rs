//! Ledger RPC gateway.
//!
//! # Data Flow
//! ```text
//! RpcConfig (endpoint URL, timeout)
//!     → client.rs (one reqwest::Client, shared by clones)
//!     → POST {jsonrpc, id, method, params}
//!     → types.rs (RpcError: transport / timeout / upstream / rpc)
//! ```
//!
//! # Constraints
//! - Exactly one outbound POST per call; no retry loop here
//! - Every call carries the configured timeout
//! - No mutable state is shared between concurrent calls

pub mod client;
pub mod types;

pub use client::RpcClient;
pub use types::{RpcError, RpcResult};
