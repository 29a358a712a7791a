//! Category descriptors for directory navigation.
//!
//! Docusaurus reads a `_category_.json` per docs directory to label and
//! order the sidebar category. One descriptor is written per non-root
//! source directory, after the directory's whole subtree has been
//! converted. Positions step by 100 per nesting level so manually curated
//! categories can slot between generated ones.

use crate::naming;
use serde::{Deserialize, Serialize};

/// Reserved descriptor file name. Excluded from traversal so a previous
/// run's descriptors are never re-ingested as source entries.
pub const CATEGORY_FILE_NAME: &str = "_category_.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub label: String,
    pub position: u32,
    pub link: CategoryLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl CategoryDescriptor {
    /// Build the descriptor for a directory at the given nesting level
    /// (the root's immediate subdirectories are level 1).
    pub fn new(dir_name: &str, level: usize) -> Self {
        let label = naming::category_label(dir_name);
        let description = format!("Documentation for {label}");
        Self {
            label,
            position: (level as u32) * 100,
            link: CategoryLink {
                kind: "generated-index".to_string(),
                description,
            },
        }
    }

    /// Pretty-printed JSON, as written to `_category_.json`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_fields() {
        let desc = CategoryDescriptor::new("api-docs", 1);
        assert_eq!(desc.label, "Api Docs");
        assert_eq!(desc.position, 100);
        assert_eq!(desc.link.kind, "generated-index");
        assert_eq!(desc.link.description, "Documentation for Api Docs");
    }

    #[test]
    fn position_steps_by_level() {
        assert_eq!(CategoryDescriptor::new("a", 1).position, 100);
        assert_eq!(CategoryDescriptor::new("a", 2).position, 200);
        assert_eq!(CategoryDescriptor::new("a", 5).position, 500);
    }

    #[test]
    fn json_uses_type_key() {
        let json = CategoryDescriptor::new("net", 2).to_json().unwrap();
        assert!(json.contains("\"type\": \"generated-index\""));
        assert!(json.contains("\"label\": \"Net\""));
        assert!(json.contains("\"position\": 200"));
    }

    #[test]
    fn json_round_trips() {
        let desc = CategoryDescriptor::new("device_drivers", 3);
        let json = desc.to_json().unwrap();
        let parsed: CategoryDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.label, "Device Drivers");
        assert_eq!(parsed.position, 300);
        assert_eq!(parsed.link.kind, "generated-index");
        assert_eq!(parsed.link.description, "Documentation for Device Drivers");
    }
}
