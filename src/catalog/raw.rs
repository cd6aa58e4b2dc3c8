//! Raw catalog records as authored.
//!
//! Everything except `id` is optional and enum-valued fields arrive as
//! plain strings; the normalizer is the only code that interprets
//! them. Field aliases accept both snake_case and the camelCase used
//! by older catalog exports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level shape of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub categories: Vec<RawCategory>,
    #[serde(default)]
    pub scenarios: Vec<RawScenario>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub metadata: Option<RawCategoryMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCategoryMetadata {
    #[serde(default, alias = "primaryPhilosophy")]
    pub primary_philosophy: Option<String>,
    #[serde(default, alias = "philosophicalApproaches")]
    pub philosophical_approaches: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScenario {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub metadata: Option<RawScenarioMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScenarioMetadata {
    #[serde(default, alias = "philosophicalLeaning")]
    pub philosophical_leaning: Option<String>,
    /// Arbitrary JSON: authors write numbers, numeric strings, or junk.
    #[serde(default, alias = "estimatedTime")]
    pub estimated_time: Option<Value>,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_export() {
        let json = r#"{
            "categories": [{
                "id": "ethics-1",
                "title": "Intro",
                "metadata": {
                    "primaryPhilosophy": "utilitarianism",
                    "philosophicalApproaches": ["utilitarianism", "deontology"],
                    "tags": ["Bias"]
                }
            }],
            "scenarios": [{
                "id": "s1",
                "categoryId": "ethics-1",
                "metadata": { "estimatedTime": "10", "philosophicalLeaning": "deontology" }
            }]
        }"#;
        let raw: RawCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(raw.categories.len(), 1);
        let meta = raw.categories[0].metadata.as_ref().unwrap();
        assert_eq!(meta.primary_philosophy.as_deref(), Some("utilitarianism"));
        assert_eq!(
            raw.scenarios[0].category_id.as_deref(),
            Some("ethics-1")
        );
    }

    #[test]
    fn missing_fields_default() {
        let raw: RawScenario = serde_json::from_str(r#"{"id": "s1"}"#).unwrap();
        assert!(raw.title.is_none());
        assert!(raw.metadata.is_none());
    }
}
