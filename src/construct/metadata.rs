//! Metadata entries recorded on construct nodes.

use serde::{Deserialize, Serialize};

/// An immutable `(type, data)` pair appended to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Entry kind, e.g. `"interface"`.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Payload for the entry.
    pub data: String,
}

impl MetadataEntry {
    /// Create a new entry.
    pub fn new(entry_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            data: data.into(),
        }
    }

    /// Exact match on both fields.
    pub fn matches(&self, entry_type: &str, data: &str) -> bool {
        self.entry_type == entry_type && self.data == data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_type_key() {
        let entry = MetadataEntry::new("interface", "Foo");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "interface", "data": "Foo" }));
    }

    #[test]
    fn test_matches_is_exact() {
        let entry = MetadataEntry::new("interface", "Foo");
        assert!(entry.matches("interface", "Foo"));
        assert!(!entry.matches("interface", "foo"));
        assert!(!entry.matches("Interface", "Foo"));
        assert!(!entry.matches("interface", "FooManager"));
    }
}
