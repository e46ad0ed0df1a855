//! Raw ledger JSON → normalized records.
//!
//! Missing or malformed fields degrade to defaults (empty string, `None`,
//! zero, `"unknown"`) instead of failing the request.

use serde_json::Value;

use crate::assets::types::{OwnedObject, TransactionRecord};
use crate::classifier::classify;

/// MIST per SUI.
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Convert minor units to major units.
pub fn mist_to_sui(mist: i128) -> f64 {
    mist as f64 / MIST_PER_SUI as f64
}

/// `totalBalance` of a `suix_getBalance` result, in MIST.
pub fn balance_mist(result: &Value) -> u64 {
    match result.get("totalBalance") {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(v) => v.as_u64().unwrap_or(0),
        None => 0,
    }
}

/// Objects from a `suix_getOwnedObjects` page.
pub fn owned_objects(result: &Value) -> Vec<OwnedObject> {
    page_items(result).iter().map(owned_object).collect()
}

/// Normalize and classify one owned-object entry.
pub fn owned_object(item: &Value) -> OwnedObject {
    let data = item.get("data").unwrap_or(&Value::Null);
    let display = data
        .get("display")
        .and_then(|d| d.get("data"))
        .unwrap_or(&Value::Null);

    let object_type = string_field(data, "type");
    let name = string_field(display, "name");
    let description = string_field(display, "description");
    let category = classify(&object_type, &name, &description);

    OwnedObject {
        object_id: opt_string_field(data, "objectId"),
        image_url: string_field(display, "image_url"),
        version: opt_string_field(data, "version"),
        digest: opt_string_field(data, "digest"),
        object_type,
        name,
        description,
        category,
    }
}

/// Transactions from a `suix_queryTransactionBlocks` page.
pub fn transaction_records(result: &Value) -> Vec<TransactionRecord> {
    page_items(result).iter().map(transaction_record).collect()
}

/// Normalize one transaction block response.
pub fn transaction_record(tx: &Value) -> TransactionRecord {
    let effects = tx.get("effects").unwrap_or(&Value::Null);
    let gas = effects.get("gasUsed").unwrap_or(&Value::Null);

    let gas_cost_mist = net_gas_cost(
        int_field(gas, "computationCost"),
        int_field(gas, "storageCost"),
        int_field(gas, "storageRebate"),
    );

    TransactionRecord {
        digest: opt_string_field(tx, "digest"),
        timestamp_ms: opt_string_field(tx, "timestampMs"),
        status: effects
            .get("status")
            .and_then(|s| s.get("status"))
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        gas_cost_mist,
        gas_cost_sui: mist_to_sui(gas_cost_mist as i128),
    }
}

/// Signed net gas. Not clamped: a rebate larger than the cost goes negative.
pub fn net_gas_cost(computation: i64, storage: i64, rebate: i64) -> i64 {
    computation.saturating_add(storage).saturating_sub(rebate)
}

fn page_items(result: &Value) -> &[Value] {
    result
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn string_field(value: &Value, key: &str) -> String {
    opt_string_field(value, key).unwrap_or_default()
}

/// Strings pass through; numbers (some nodes send versions numerically)
/// are rendered; anything else is absent.
fn opt_string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Sui encodes u64 amounts as decimal strings.
fn int_field(value: &Value, key: &str) -> i64 {
    match value.get(key) {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(v) => v.as_i64().unwrap_or(0),
        None => 0,
    }
}
