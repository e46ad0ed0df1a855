//! EVE Frontier x Sui fleet analytics.
//!
//! Turns a wallet's Sui balance, owned objects and transaction history into
//! a classified fleet view for the dashboard.

pub mod config;
pub mod rpc;
pub mod classifier;
pub mod assets;
pub mod world;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use assets::AssetPipeline;
pub use classifier::{classify, Category};
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use rpc::{RpcClient, RpcError};
