//! EVE Frontier world data passthrough.
//!
//! Independent of the ledger RPC: the dashboard shows game-world data next
//! to on-chain data, and a world API outage must not take the ledger views
//! down with it. The HTTP handler turns failures into a 200 fallback body.

pub mod client;

pub use client::{endpoint_path, WorldClient, WorldError};
