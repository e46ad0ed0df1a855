//! Semantic asset categories.

use serde::{Deserialize, Serialize};

/// Category assigned to every owned object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ship,
    Module,
    Resource,
    Unknown,
}

impl Category {
    /// All categories in breakdown order.
    pub const ALL: [Category; 4] = [
        Category::Ship,
        Category::Module,
        Category::Resource,
        Category::Unknown,
    ];

    /// Wire name (`ship`, `module`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ship => "ship",
            Category::Module => "module",
            Category::Resource => "resource",
            Category::Unknown => "unknown",
        }
    }

    /// Dashboard label used in category breakdowns.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ship => "Ships",
            Category::Module => "Modules",
            Category::Resource => "Resources",
            Category::Unknown => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Ship).unwrap(), "\"ship\"");
        assert_eq!(
            serde_json::from_str::<Category>("\"unknown\"").unwrap(),
            Category::Unknown
        );
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Ships", "Modules", "Resources", "Other"]);
    }
}
