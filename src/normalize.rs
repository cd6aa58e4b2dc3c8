//! Metadata normalizer: raw records in, enhanced records out.
//!
//! The normalizer is the sole boundary that interprets raw catalog
//! shapes. Bad records never abort a build: they are excluded and
//! reported as [`CatalogWarning`]s alongside the normalized catalog,
//! so one broken record cannot take down the whole load.
//!
//! Normalization is idempotent: feeding an already-normalized record
//! back through produces an identical record.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::raw::{RawCatalog, RawCategory, RawScenario};
use crate::catalog::types::{
    Complexity, Difficulty, EnhancedCategory, EnhancedScenario, Philosophy,
};

/// Replacement for missing or unusable `estimated_time` values.
pub const DEFAULT_ESTIMATED_MINUTES: u32 = 15;

/// Complexity assumed when the author left it out entirely.
pub const DEFAULT_COMPLEXITY: Complexity = Complexity::Moderate;

/// Fully normalized catalog, ready for indexing.
#[derive(Debug, Clone, Default)]
pub struct NormalizedCatalog {
    pub categories: Vec<EnhancedCategory>,
    pub scenarios: Vec<EnhancedScenario>,
}

/// A record-level problem found during normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogWarning {
    /// Id of the offending record.
    pub record: String,
    pub kind: WarningKind,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MissingField,
    InvalidDifficulty,
    InvalidPhilosophy,
    InvalidComplexity,
    DanglingCategory,
    DuplicateId,
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.record, self.detail)
    }
}

/// Normalize a raw catalog. Never fails; problems come back as warnings
/// and the offending records are excluded from the result.
#[must_use]
pub fn normalize(raw: RawCatalog) -> (NormalizedCatalog, Vec<CatalogWarning>) {
    let mut warnings = Vec::new();

    let mut categories: Vec<EnhancedCategory> = Vec::with_capacity(raw.categories.len());
    let mut category_ids: HashSet<String> = HashSet::new();
    for raw_cat in raw.categories {
        if let Some(cat) = normalize_category(raw_cat, &category_ids, &mut warnings) {
            category_ids.insert(cat.id.clone());
            categories.push(cat);
        }
    }

    let mut scenarios: Vec<EnhancedScenario> = Vec::with_capacity(raw.scenarios.len());
    let mut scenario_ids: HashSet<String> = HashSet::new();
    for raw_scene in raw.scenarios {
        if let Some(scene) =
            normalize_scenario(raw_scene, &category_ids, &scenario_ids, &mut warnings)
        {
            scenario_ids.insert(scene.id.clone());
            scenarios.push(scene);
        }
    }

    // Back-fill each category's owned scenario ids, in catalog order.
    let mut owned: HashMap<&str, Vec<String>> = HashMap::new();
    for scene in &scenarios {
        owned
            .entry(scene.category_id.as_str())
            .or_default()
            .push(scene.id.clone());
    }
    for cat in &mut categories {
        if let Some(ids) = owned.remove(cat.id.as_str()) {
            cat.scenario_ids = ids;
        }
    }

    tracing::debug!(
        categories = categories.len(),
        scenarios = scenarios.len(),
        warnings = warnings.len(),
        "catalog normalized"
    );

    (
        NormalizedCatalog {
            categories,
            scenarios,
        },
        warnings,
    )
}

fn normalize_category(
    raw: RawCategory,
    seen: &HashSet<String>,
    warnings: &mut Vec<CatalogWarning>,
) -> Option<EnhancedCategory> {
    let id = raw.id.trim().to_string();
    if id.is_empty() {
        warnings.push(warn("<category>", WarningKind::MissingField, "category has empty id"));
        return None;
    }
    if seen.contains(&id) {
        warnings.push(warn(&id, WarningKind::DuplicateId, "duplicate category id"));
        return None;
    }

    let difficulty = parse_required_enum::<Difficulty>(
        raw.difficulty.as_deref(),
        &id,
        "difficulty",
        WarningKind::InvalidDifficulty,
        warnings,
    )?;

    let meta = raw.metadata.unwrap_or_default();
    let primary = parse_required_enum::<Philosophy>(
        meta.primary_philosophy.as_deref(),
        &id,
        "primary philosophy",
        WarningKind::InvalidPhilosophy,
        warnings,
    )?;

    let mut approaches: Vec<Philosophy> = Vec::new();
    for name in meta.philosophical_approaches.unwrap_or_default() {
        match name.parse::<Philosophy>() {
            Ok(p) => {
                if !approaches.contains(&p) {
                    approaches.push(p);
                }
            }
            Err(_) => warnings.push(warn(
                &id,
                WarningKind::InvalidPhilosophy,
                &format!("unknown approach '{}' dropped", name.trim()),
            )),
        }
    }
    // The primary approach is always listed.
    if !approaches.contains(&primary) {
        approaches.insert(0, primary);
    }

    Some(EnhancedCategory {
        title: raw.title.map_or_else(|| id.clone(), |t| t.trim().to_string()),
        icon: raw.icon.unwrap_or_default(),
        id,
        difficulty,
        primary_philosophy: primary,
        approaches,
        tags: normalize_tags(meta.tags.unwrap_or_default()),
        scenario_ids: Vec::new(),
    })
}

fn normalize_scenario(
    raw: RawScenario,
    category_ids: &HashSet<String>,
    seen: &HashSet<String>,
    warnings: &mut Vec<CatalogWarning>,
) -> Option<EnhancedScenario> {
    let id = raw.id.trim().to_string();
    if id.is_empty() {
        warnings.push(warn("<scenario>", WarningKind::MissingField, "scenario has empty id"));
        return None;
    }
    if seen.contains(&id) {
        warnings.push(warn(&id, WarningKind::DuplicateId, "duplicate scenario id"));
        return None;
    }

    let category_id = match raw.category_id {
        Some(c) if !c.trim().is_empty() => c.trim().to_string(),
        _ => {
            warnings.push(warn(&id, WarningKind::MissingField, "scenario has no category_id"));
            return None;
        }
    };
    if !category_ids.contains(&category_id) {
        warnings.push(warn(
            &id,
            WarningKind::DanglingCategory,
            &format!("references unknown category '{category_id}'"),
        ));
        return None;
    }

    let difficulty = parse_required_enum::<Difficulty>(
        raw.difficulty.as_deref(),
        &id,
        "difficulty",
        WarningKind::InvalidDifficulty,
        warnings,
    )?;

    let meta = raw.metadata.unwrap_or_default();
    let leaning = parse_required_enum::<Philosophy>(
        meta.philosophical_leaning.as_deref(),
        &id,
        "philosophical leaning",
        WarningKind::InvalidPhilosophy,
        warnings,
    )?;

    // Missing complexity is tolerated with a default; an unparseable
    // value is a validation failure like any other bad enum.
    let complexity = match meta.complexity.as_deref() {
        None => DEFAULT_COMPLEXITY,
        Some(s) => match s.parse::<Complexity>() {
            Ok(c) => c,
            Err(_) => {
                warnings.push(warn(
                    &id,
                    WarningKind::InvalidComplexity,
                    &format!("invalid complexity '{}'", s.trim()),
                ));
                return None;
            }
        },
    };

    Some(EnhancedScenario {
        title: raw.title.map_or_else(|| id.clone(), |t| t.trim().to_string()),
        id,
        category_id,
        difficulty,
        leaning,
        estimated_minutes: parse_estimated_minutes(meta.estimated_time.as_ref()),
        complexity,
        tags: normalize_tags(meta.tags.unwrap_or_default()),
    })
}

fn parse_required_enum<T: FromStr>(
    value: Option<&str>,
    record: &str,
    field: &str,
    kind: WarningKind,
    warnings: &mut Vec<CatalogWarning>,
) -> Option<T> {
    match value {
        None => {
            warnings.push(warn(record, WarningKind::MissingField, &format!("missing {field}")));
            None
        }
        Some(s) => match s.parse::<T>() {
            Ok(v) => Some(v),
            Err(_) => {
                warnings.push(warn(record, kind, &format!("invalid {field} '{}'", s.trim())));
                None
            }
        },
    }
}

/// Trim, lowercase, drop empties, set semantics.
#[must_use]
pub fn normalize_tags(tags: Vec<String>) -> BTreeSet<String> {
    tags.into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Estimated time tolerates incomplete authoring data: numbers and
/// numeric strings pass through, anything else (including non-positive
/// values) becomes [`DEFAULT_ESTIMATED_MINUTES`].
#[must_use]
pub fn parse_estimated_minutes(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).ok().filter(|v| *v > 0).unwrap_or(DEFAULT_ESTIMATED_MINUTES)
            } else if let Some(f) = n.as_f64() {
                if f > 0.0 && f <= f64::from(u32::MAX) {
                    let rounded = f.round();
                    if rounded >= 1.0 {
                        rounded as u32
                    } else {
                        1
                    }
                } else {
                    DEFAULT_ESTIMATED_MINUTES
                }
            } else {
                DEFAULT_ESTIMATED_MINUTES
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_ESTIMATED_MINUTES),
        _ => DEFAULT_ESTIMATED_MINUTES,
    }
}

fn warn(record: &str, kind: WarningKind, detail: &str) -> CatalogWarning {
    CatalogWarning {
        record: record.to_string(),
        kind,
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::raw::{RawCategoryMetadata, RawScenarioMetadata};
    use serde_json::json;

    fn raw_category(id: &str, difficulty: &str, primary: &str) -> RawCategory {
        RawCategory {
            id: id.to_string(),
            title: Some(format!("{id} title")),
            icon: None,
            difficulty: Some(difficulty.to_string()),
            metadata: Some(RawCategoryMetadata {
                primary_philosophy: Some(primary.to_string()),
                philosophical_approaches: None,
                tags: None,
            }),
        }
    }

    fn raw_scenario(id: &str, category: &str, difficulty: &str, leaning: &str) -> RawScenario {
        RawScenario {
            id: id.to_string(),
            title: Some(format!("{id} title")),
            category_id: Some(category.to_string()),
            difficulty: Some(difficulty.to_string()),
            metadata: Some(RawScenarioMetadata {
                philosophical_leaning: Some(leaning.to_string()),
                estimated_time: Some(json!(10)),
                complexity: Some("low".to_string()),
                tags: Some(vec!["Bias".to_string(), " bias ".to_string(), "fairness".to_string()]),
            }),
        }
    }

    #[test]
    fn tags_are_trimmed_lowercased_deduplicated() {
        let tags = normalize_tags(vec![
            " Bias ".to_string(),
            "bias".to_string(),
            "FAIRNESS".to_string(),
            "  ".to_string(),
        ]);
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec!["bias".to_string(), "fairness".to_string()]
        );
    }

    #[test]
    fn estimated_minutes_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_estimated_minutes(Some(&json!(25))), 25);
        assert_eq!(parse_estimated_minutes(Some(&json!("25"))), 25);
        assert_eq!(parse_estimated_minutes(Some(&json!(12.6))), 13);
    }

    #[test]
    fn estimated_minutes_defaults_on_garbage() {
        assert_eq!(parse_estimated_minutes(None), DEFAULT_ESTIMATED_MINUTES);
        assert_eq!(parse_estimated_minutes(Some(&json!(0))), DEFAULT_ESTIMATED_MINUTES);
        assert_eq!(parse_estimated_minutes(Some(&json!(-5))), DEFAULT_ESTIMATED_MINUTES);
        assert_eq!(
            parse_estimated_minutes(Some(&json!("soon"))),
            DEFAULT_ESTIMATED_MINUTES
        );
        assert_eq!(
            parse_estimated_minutes(Some(&json!({"minutes": 5}))),
            DEFAULT_ESTIMATED_MINUTES
        );
    }

    #[test]
    fn normalizes_a_valid_catalog_without_warnings() {
        let raw = RawCatalog {
            categories: vec![raw_category("ethics-1", "beginner", "utilitarianism")],
            scenarios: vec![raw_scenario("s1", "ethics-1", "beginner", "deontology")],
        };
        let (catalog, warnings) = normalize(raw);
        assert!(warnings.is_empty());
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.scenarios.len(), 1);

        let scene = &catalog.scenarios[0];
        assert_eq!(scene.estimated_minutes, 10);
        assert!(scene.tags.contains("bias"));
        assert!(scene.tags.contains("fairness"));
        assert_eq!(scene.tags.len(), 2);

        // Category picked up its owned scenario.
        assert_eq!(catalog.categories[0].scenario_ids, vec!["s1".to_string()]);
        // Primary philosophy is always among the approaches.
        assert_eq!(
            catalog.categories[0].approaches,
            vec![Philosophy::Utilitarianism]
        );
    }

    #[test]
    fn invalid_difficulty_excludes_record_with_warning() {
        let raw = RawCatalog {
            categories: vec![raw_category("ethics-1", "beginner", "utilitarianism")],
            scenarios: vec![
                raw_scenario("s1", "ethics-1", "expert", "deontology"),
                raw_scenario("s2", "ethics-1", "advanced", "deontology"),
            ],
        };
        let (catalog, warnings) = normalize(raw);
        assert_eq!(catalog.scenarios.len(), 1);
        assert_eq!(catalog.scenarios[0].id, "s2");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].record, "s1");
        assert_eq!(warnings[0].kind, WarningKind::InvalidDifficulty);
    }

    #[test]
    fn dangling_category_reference_excludes_scenario() {
        let raw = RawCatalog {
            categories: vec![raw_category("ethics-1", "beginner", "utilitarianism")],
            scenarios: vec![raw_scenario("s1", "nope", "beginner", "deontology")],
        };
        let (catalog, warnings) = normalize(raw);
        assert!(catalog.scenarios.is_empty());
        assert_eq!(warnings[0].kind, WarningKind::DanglingCategory);
    }

    #[test]
    fn excluded_category_cascades_to_its_scenarios() {
        let raw = RawCatalog {
            categories: vec![raw_category("ethics-1", "impossible", "utilitarianism")],
            scenarios: vec![raw_scenario("s1", "ethics-1", "beginner", "deontology")],
        };
        let (catalog, warnings) = normalize(raw);
        assert!(catalog.categories.is_empty());
        assert!(catalog.scenarios.is_empty());
        // One warning for the category, one for the now-dangling scenario.
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[1].kind, WarningKind::DanglingCategory);
    }

    #[test]
    fn duplicate_scenario_id_keeps_first() {
        let raw = RawCatalog {
            categories: vec![raw_category("ethics-1", "beginner", "utilitarianism")],
            scenarios: vec![
                raw_scenario("s1", "ethics-1", "beginner", "deontology"),
                raw_scenario("s1", "ethics-1", "advanced", "stoicism"),
            ],
        };
        let (catalog, warnings) = normalize(raw);
        assert_eq!(catalog.scenarios.len(), 1);
        assert_eq!(catalog.scenarios[0].difficulty, Difficulty::Beginner);
        assert_eq!(warnings[0].kind, WarningKind::DuplicateId);
    }

    #[test]
    fn missing_optional_metadata_gets_defaults() {
        let raw = RawCatalog {
            categories: vec![raw_category("ethics-1", "beginner", "utilitarianism")],
            scenarios: vec![RawScenario {
                id: "s1".to_string(),
                title: None,
                category_id: Some("ethics-1".to_string()),
                difficulty: Some("beginner".to_string()),
                metadata: Some(RawScenarioMetadata {
                    philosophical_leaning: Some("stoicism".to_string()),
                    estimated_time: None,
                    complexity: None,
                    tags: None,
                }),
            }],
        };
        let (catalog, warnings) = normalize(raw);
        assert!(warnings.is_empty());
        let scene = &catalog.scenarios[0];
        assert_eq!(scene.title, "s1");
        assert_eq!(scene.estimated_minutes, DEFAULT_ESTIMATED_MINUTES);
        assert_eq!(scene.complexity, DEFAULT_COMPLEXITY);
        assert!(scene.tags.is_empty());
    }

    #[test]
    fn unknown_approach_is_dropped_not_fatal() {
        let mut cat = raw_category("ethics-1", "beginner", "utilitarianism");
        cat.metadata.as_mut().unwrap().philosophical_approaches = Some(vec![
            "deontology".to_string(),
            "astrology".to_string(),
        ]);
        let raw = RawCatalog {
            categories: vec![cat],
            scenarios: vec![],
        };
        let (catalog, warnings) = normalize(raw);
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(
            catalog.categories[0].approaches,
            vec![Philosophy::Utilitarianism, Philosophy::Deontology]
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::InvalidPhilosophy);
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = RawCatalog {
            categories: vec![raw_category("ethics-1", "beginner", "utilitarianism")],
            scenarios: vec![raw_scenario("s1", "ethics-1", "beginner", "deontology")],
        };
        let (first, _) = normalize(raw);

        // Round-trip the normalized records back into raw form.
        let raw_again = RawCatalog {
            categories: first
                .categories
                .iter()
                .map(|c| RawCategory {
                    id: c.id.clone(),
                    title: Some(c.title.clone()),
                    icon: Some(c.icon.clone()),
                    difficulty: Some(c.difficulty.to_string()),
                    metadata: Some(RawCategoryMetadata {
                        primary_philosophy: Some(c.primary_philosophy.to_string()),
                        philosophical_approaches: Some(
                            c.approaches.iter().map(ToString::to_string).collect(),
                        ),
                        tags: Some(c.tags.iter().cloned().collect()),
                    }),
                })
                .collect(),
            scenarios: first
                .scenarios
                .iter()
                .map(|s| RawScenario {
                    id: s.id.clone(),
                    title: Some(s.title.clone()),
                    category_id: Some(s.category_id.clone()),
                    difficulty: Some(s.difficulty.to_string()),
                    metadata: Some(RawScenarioMetadata {
                        philosophical_leaning: Some(s.leaning.to_string()),
                        estimated_time: Some(json!(s.estimated_minutes)),
                        complexity: Some(s.complexity.to_string()),
                        tags: Some(s.tags.iter().cloned().collect()),
                    }),
                })
                .collect(),
        };
        let (second, warnings) = normalize(raw_again);
        assert!(warnings.is_empty());
        assert_eq!(first.categories, second.categories);
        assert_eq!(first.scenarios, second.scenarios);
    }
}
