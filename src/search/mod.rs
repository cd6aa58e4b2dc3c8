//! Query engine over a catalog snapshot.
//!
//! Free-text matching is a case-insensitive substring check against
//! the scenario title and its owning category title; an empty query
//! matches everything and acts as a pure filter pass. Facets narrow
//! the candidate set by intersecting postings lists, so results always
//! come back in catalog insertion order. No relevance ranking exists;
//! ties are only ever broken by catalog position.

pub mod filters;

pub use filters::SearchFilters;

use crate::catalog::types::{EnhancedCategory, EnhancedScenario};
use crate::index::intersect;
use crate::snapshot::CatalogSnapshot;

impl CatalogSnapshot {
    /// Search scenarios by free text plus facet filters. All specified
    /// criteria are ANDed; the empty query with empty filters returns
    /// the whole catalog in order.
    #[must_use]
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<&EnhancedScenario> {
        let mut candidates: Option<Vec<usize>> = None;

        if let Some(difficulty) = filters.difficulty {
            narrow(&mut candidates, self.index().difficulty_postings(difficulty));
        }
        if let Some(philosophy) = filters.philosophy {
            narrow(&mut candidates, self.index().philosophy_postings(philosophy));
        }
        for tag in &filters.tags {
            narrow(&mut candidates, self.index().tag_postings(tag));
        }

        let needle = query.trim().to_lowercase();
        match candidates {
            Some(positions) => positions
                .into_iter()
                .map(|pos| self.scenario_at(pos))
                .filter(|scene| self.scenario_matches_text(scene, &needle))
                .collect(),
            None => self
                .scenarios()
                .iter()
                .filter(|scene| self.scenario_matches_text(scene, &needle))
                .collect(),
        }
    }

    /// Search categories by free text, matching title, tags, and
    /// philosophical approach names.
    #[must_use]
    pub fn search_categories(&self, query: &str) -> Vec<&EnhancedCategory> {
        let needle = query.trim().to_lowercase();
        self.categories()
            .iter()
            .filter(|cat| category_matches_text(cat, &needle))
            .collect()
    }

    fn scenario_matches_text(&self, scenario: &EnhancedScenario, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        if scenario.title.to_lowercase().contains(needle) {
            return true;
        }
        self.category(&scenario.category_id)
            .is_some_and(|cat| cat.title.to_lowercase().contains(needle))
    }
}

fn category_matches_text(category: &EnhancedCategory, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    category.title.to_lowercase().contains(needle)
        || category.tags.iter().any(|tag| tag.contains(needle))
        || category
            .approaches
            .iter()
            .any(|p| p.as_str().contains(needle))
}

fn narrow(candidates: &mut Option<Vec<usize>>, postings: &[usize]) {
    *candidates = Some(match candidates.take() {
        Some(current) => intersect(&current, postings),
        None => postings.to_vec(),
    });
}
