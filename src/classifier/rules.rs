//! Keyword rule table and the classification walk.

use crate::classifier::category::Category;

/// Fields a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The namespaced Move type string.
    Type,
    /// Display name and description.
    Metadata,
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub keywords: &'static [&'static str],
    pub scope: Scope,
}

pub const SHIP_KEYWORDS: &[&str] = &[
    "ship", "vessel", "fleet", "frigate", "cruiser", "destroyer", "carrier",
];

pub const MODULE_KEYWORDS: &[&str] = &["module", "weapon", "armor", "shield", "turret", "launcher"];

pub const RESOURCE_KEYWORDS: &[&str] = &["resource", "ore", "mineral", "fuel", "tritanium"];

/// Rules in priority order. Every type-scoped rule runs before any
/// metadata-scoped rule; first match wins.
///
/// Matching is plain substring search, so short keywords over-match
/// ("ore" hits "core", "score"). Existing dashboards depend on these
/// outcomes; keep it that way.
pub const RULES: &[Rule] = &[
    Rule { category: Category::Ship, keywords: SHIP_KEYWORDS, scope: Scope::Type },
    Rule { category: Category::Module, keywords: MODULE_KEYWORDS, scope: Scope::Type },
    Rule { category: Category::Resource, keywords: RESOURCE_KEYWORDS, scope: Scope::Type },
    Rule { category: Category::Ship, keywords: SHIP_KEYWORDS, scope: Scope::Metadata },
    Rule { category: Category::Module, keywords: MODULE_KEYWORDS, scope: Scope::Metadata },
    Rule { category: Category::Resource, keywords: RESOURCE_KEYWORDS, scope: Scope::Metadata },
];

/// Classify an object using [`RULES`].
pub fn classify(type_string: &str, name: &str, description: &str) -> Category {
    classify_with(RULES, type_string, name, description)
}

/// Classify against an arbitrary rule table. Never fails; no match yields
/// [`Category::Unknown`].
pub fn classify_with(rules: &[Rule], type_string: &str, name: &str, description: &str) -> Category {
    let type_lower = type_string.to_lowercase();
    let name_lower = name.to_lowercase();
    let description_lower = description.to_lowercase();

    rules
        .iter()
        .find(|rule| {
            let hit = |text: &str| rule.keywords.iter().any(|k| text.contains(k));
            match rule.scope {
                Scope::Type => hit(&type_lower),
                Scope::Metadata => hit(&name_lower) || hit(&description_lower),
            }
        })
        .map(|rule| rule.category)
        .unwrap_or(Category::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ship_beats_name_module() {
        assert_eq!(
            classify("0xeve::ship::Ship", "Heavy Turret Mount", ""),
            Category::Ship
        );
    }

    #[test]
    fn test_type_module_beats_name_ship() {
        assert_eq!(
            classify("0xeve::weapon::Blaster", "Frigate killer", ""),
            Category::Module
        );
    }

    #[test]
    fn test_unmatched_is_unknown() {
        assert_eq!(classify("0x1::foo::Bar", "widget", ""), Category::Unknown);
        assert_eq!(classify("", "", ""), Category::Unknown);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("0xA::Hangar::VESSEL", "", ""), Category::Ship);
        assert_eq!(classify("0x1::x::Y", "TRITANIUM ingot", ""), Category::Resource);
    }

    #[test]
    fn test_description_is_metadata() {
        assert_eq!(
            classify("0x1::item::Item", "Crate", "Mounts a missile launcher"),
            Category::Module
        );
    }

    #[test]
    fn test_substring_over_match_is_preserved() {
        // "ore" inside "core" still matches the resource set.
        assert_eq!(classify("0x1::core::Thing", "", ""), Category::Resource);
    }

    #[test]
    fn test_deterministic() {
        let inputs = [
            ("0x2::coin::Coin<0x2::sui::SUI>", "", ""),
            ("0xeve::fleet::Carrier", "x", "y"),
            ("0x1::foo::Bar", "Shield booster", ""),
        ];
        for (t, n, d) in inputs {
            assert_eq!(classify(t, n, d), classify(t, n, d));
        }
    }

    #[test]
    fn test_custom_table() {
        let rules = [Rule {
            category: Category::Resource,
            keywords: &["ice"],
            scope: Scope::Metadata,
        }];
        assert_eq!(classify_with(&rules, "0x1::a::B", "Ice block", ""), Category::Resource);
        assert_eq!(classify_with(&rules, "0x1::ice::B", "", ""), Category::Unknown);
    }
}
