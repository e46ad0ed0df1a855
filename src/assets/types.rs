//! Normalized records and the composed response shapes.
//!
//! Everything here is built fresh per request and dropped once the response
//! is written.

use serde::{Deserialize, Serialize};

use crate::classifier::Category;

/// A ledger object owned by the queried address, normalized and classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObject {
    pub object_id: Option<String>,
    /// Namespaced Move type, e.g. `0xabc::ship::Frigate`.
    #[serde(rename = "type")]
    pub object_type: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub version: Option<String>,
    pub digest: Option<String>,
    pub category: Category,
}

/// Balance plus classified objects for one address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsReport {
    pub wallet: String,
    /// Balance in SUI (major units).
    pub sui_balance: f64,
    /// Balance in MIST (minor units).
    pub sui_balance_mist: u64,
    pub total_objects: usize,
    pub objects: Vec<OwnedObject>,
}

/// Per-category counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_assets: usize,
    pub ships: usize,
    pub modules: usize,
    pub resources: usize,
    pub other: usize,
}

/// One bar of the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Frequency of one stripped type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub type_name: String,
    pub count: usize,
}

/// Fleet view: counts, rankings and objects partitioned by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetReport {
    pub wallet: String,
    pub sui_balance: f64,
    pub fleet_summary: FleetSummary,
    pub category_breakdown: Vec<CategoryCount>,
    pub top_asset_types: Vec<TypeCount>,
    pub ships: Vec<OwnedObject>,
    pub modules: Vec<OwnedObject>,
    pub resources: Vec<OwnedObject>,
    pub other: Vec<OwnedObject>,
}

/// A transaction sent from the queried address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub digest: Option<String>,
    pub timestamp_ms: Option<String>,
    pub status: String,
    /// `computationCost + storageCost - storageRebate`; negative when the
    /// rebate exceeds the cost.
    pub gas_cost_mist: i64,
    pub gas_cost_sui: f64,
}

/// Recent transactions for one address, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsReport {
    pub wallet: String,
    pub transaction_count: usize,
    pub transactions: Vec<TransactionRecord>,
}
