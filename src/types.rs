use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry: a named capability together with its menu path,
/// human-readable description, and category label.
///
/// Records are immutable once constructed. The index orders them by
/// case-insensitively folded name; the other fields are payload only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub name: String,
    pub path: String,
    pub description: String,
    pub category: String,
}

impl FeatureRecord {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for FeatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "📍 {}\n   {}\n   Category: {}\n   Path: {}",
            self.name, self.description, self.category, self.path
        )
    }
}

/// Case fold applied to every name before comparison or ordering.
/// Unicode-aware and locale-insensitive.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}
