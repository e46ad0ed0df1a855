//! Asset aggregation pipeline.
//!
//! # Data Flow
//! ```text
//! get_assets(address)
//!     → try_join(suix_getBalance, suix_getOwnedObjects)   (both or nothing)
//!     → normalize.rs (raw JSON → OwnedObject, classify each)
//!     → AssetsReport
//!
//! get_fleet(address)
//!     → get_assets
//!     → fleet.rs (partition, counts, top-10 types)
//!     → FleetReport
//!
//! get_transactions(address, limit)
//!     → suix_queryTransactionBlocks (page size ≤ 50, descending)
//!     → normalize.rs (signed gas accounting)
//!     → TransactionsReport
//! ```
//!
//! # Constraints
//! - No state survives a call; nothing is cached
//! - Only the first page is read; upstream cursors are discarded
//! - Connectivity failures fail the call, missing fields only degrade it

pub mod fleet;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use pipeline::{AssetPipeline, DEFAULT_TRANSACTIONS_LIMIT, MAX_TRANSACTIONS_PAGE_SIZE};
pub use types::{
    AssetsReport, CategoryCount, FleetReport, FleetSummary, OwnedObject, TransactionRecord,
    TransactionsReport, TypeCount,
};
