//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → request.rs (x-request-id, request span)
//!     → CORS, timeout
//!     → middleware/ (route metrics)
//!     → handlers.rs (extract wallet / limit, call AssetPipeline)
//!     → error.rs (RpcError → 503 / 502 / 400)
//!     → JSON response
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use error::{ApiError, ServerError};
pub use server::{AppState, HttpServer};
