//! Corpus-wide statistics.
//!
//! Stats are computed once per catalog load, during the snapshot
//! build, and cached on the snapshot. A reload produces a fresh
//! snapshot with fresh stats; nothing is ever recomputed in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::types::{Difficulty, Philosophy};
use crate::index::CatalogIndex;
use crate::normalize::NormalizedCatalog;

/// Aggregate view of a loaded catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogStats {
    pub total_categories: usize,
    pub total_scenarios: usize,
    /// Mean scenario time, rounded to one decimal. `0.0` for an empty
    /// catalog.
    pub average_estimated_minutes: f64,
    /// Scenario counts per difficulty; zero-count keys omitted.
    pub difficulty_breakdown: BTreeMap<Difficulty, usize>,
    /// Scenario counts per leaning; zero-count keys omitted.
    pub philosophy_breakdown: BTreeMap<Philosophy, usize>,
}

/// A tag with its usage count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Single pass over the normalized catalog.
#[must_use]
pub fn compute_stats(catalog: &NormalizedCatalog) -> CatalogStats {
    let mut difficulty_breakdown: BTreeMap<Difficulty, usize> = BTreeMap::new();
    let mut philosophy_breakdown: BTreeMap<Philosophy, usize> = BTreeMap::new();
    let mut total_minutes: u64 = 0;

    for scene in &catalog.scenarios {
        *difficulty_breakdown.entry(scene.difficulty).or_default() += 1;
        *philosophy_breakdown.entry(scene.leaning).or_default() += 1;
        total_minutes += u64::from(scene.estimated_minutes);
    }

    let total_scenarios = catalog.scenarios.len();
    let average_estimated_minutes = if total_scenarios == 0 {
        0.0
    } else {
        round_one_decimal(total_minutes as f64 / total_scenarios as f64)
    };

    CatalogStats {
        total_categories: catalog.categories.len(),
        total_scenarios,
        average_estimated_minutes,
        difficulty_breakdown,
        philosophy_breakdown,
    }
}

/// Tags ranked by usage count descending, ties broken alphabetically.
/// `None` limit returns every tag.
#[must_use]
pub fn popular_tags(index: &CatalogIndex, limit: Option<usize>) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = index
        .tags
        .iter()
        .map(|(tag, postings)| TagCount {
            tag: tag.clone(),
            count: postings.len(),
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    if let Some(limit) = limit {
        counts.truncate(limit);
    }
    counts
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
