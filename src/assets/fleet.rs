//! Fleet summary: partition by category and rank type frequencies.

use std::collections::HashMap;

use crate::assets::types::{CategoryCount, FleetReport, FleetSummary, OwnedObject, TypeCount};
use crate::classifier::Category;

/// Length of the `top_asset_types` ranking.
pub const TOP_TYPES_LIMIT: usize = 10;

/// Short type name: the segment after the last `::`, the whole string when
/// there is no separator, or `Unknown` for an empty type.
pub fn strip_namespace(type_string: &str) -> &str {
    if type_string.is_empty() {
        "Unknown"
    } else {
        type_string.rsplit("::").next().unwrap_or(type_string)
    }
}

/// Most frequent stripped type names, highest count first.
///
/// Equal counts keep first-seen order.
pub fn top_types(objects: &[OwnedObject], limit: usize) -> Vec<TypeCount> {
    let mut counts: Vec<TypeCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for object in objects {
        let name = strip_namespace(&object.object_type);
        match index.get(name).copied() {
            Some(i) => counts[i].count += 1,
            None => {
                index.insert(name, counts.len());
                counts.push(TypeCount {
                    type_name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps insertion order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Build the fleet view from classified objects.
pub fn summarize(wallet: String, sui_balance: f64, objects: Vec<OwnedObject>) -> FleetReport {
    let top_asset_types = top_types(&objects, TOP_TYPES_LIMIT);
    let total_assets = objects.len();

    let mut ships = Vec::new();
    let mut modules = Vec::new();
    let mut resources = Vec::new();
    let mut other = Vec::new();
    for object in objects {
        match object.category {
            Category::Ship => ships.push(object),
            Category::Module => modules.push(object),
            Category::Resource => resources.push(object),
            Category::Unknown => other.push(object),
        }
    }

    let fleet_summary = FleetSummary {
        total_assets,
        ships: ships.len(),
        modules: modules.len(),
        resources: resources.len(),
        other: other.len(),
    };

    let category_breakdown = Category::ALL
        .iter()
        .map(|&category| CategoryCount {
            category: category.label().to_string(),
            count: match category {
                Category::Ship => fleet_summary.ships,
                Category::Module => fleet_summary.modules,
                Category::Resource => fleet_summary.resources,
                Category::Unknown => fleet_summary.other,
            },
        })
        .collect();

    FleetReport {
        wallet,
        sui_balance,
        fleet_summary,
        category_breakdown,
        top_asset_types,
        ships,
        modules,
        resources,
        other,
    }
}
