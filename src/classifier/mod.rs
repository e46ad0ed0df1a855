//! Object classification.
//!
//! Maps a normalized object (type string, display name, description) to a
//! [`Category`] by case-insensitive keyword search. The rules are plain data
//! in [`rules::RULES`]; the walk is a pure function.

pub mod category;
pub mod rules;

pub use category::Category;
pub use rules::{classify, classify_with, Rule, Scope, RULES};
