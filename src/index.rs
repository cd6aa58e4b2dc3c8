//! Inverted tag and facet indices.
//!
//! Postings are positions into the snapshot's scenario vector, stored
//! in catalog order so every downstream intersection stays
//! deterministic. Indices are rebuilt from scratch on every catalog
//! load; there is no incremental update path.

use std::collections::HashMap;

use crate::catalog::types::{Difficulty, Philosophy};
use crate::normalize::NormalizedCatalog;

/// Inverted indices over the normalized scenario list.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    /// tag -> scenario positions, catalog order.
    pub tags: HashMap<String, Vec<usize>>,
    /// difficulty -> scenario positions, catalog order.
    pub difficulty: HashMap<Difficulty, Vec<usize>>,
    /// philosophy -> scenario positions, catalog order. A scenario is
    /// listed under its own leaning and under its owning category's
    /// primary philosophy and listed approaches.
    pub philosophy: HashMap<Philosophy, Vec<usize>>,
}

impl CatalogIndex {
    /// Build all indices in one O(scenarios x avg tags) pass.
    #[must_use]
    pub fn build(catalog: &NormalizedCatalog) -> Self {
        let categories: HashMap<&str, usize> = catalog
            .categories
            .iter()
            .enumerate()
            .map(|(pos, c)| (c.id.as_str(), pos))
            .collect();

        let mut index = CatalogIndex::default();
        for (pos, scene) in catalog.scenarios.iter().enumerate() {
            for tag in &scene.tags {
                index.tags.entry(tag.clone()).or_default().push(pos);
            }

            index.difficulty.entry(scene.difficulty).or_default().push(pos);

            let mut facets = vec![scene.leaning];
            if let Some(&cat_pos) = categories.get(scene.category_id.as_str()) {
                let cat = &catalog.categories[cat_pos];
                facets.push(cat.primary_philosophy);
                facets.extend(cat.approaches.iter().copied());
            }
            facets.sort_unstable();
            facets.dedup();
            for philosophy in facets {
                index.philosophy.entry(philosophy).or_default().push(pos);
            }
        }
        index
    }

    /// Number of scenarios carrying the given tag.
    #[must_use]
    pub fn tag_count(&self, tag: &str) -> usize {
        self.tags.get(tag).map_or(0, Vec::len)
    }

    /// Postings for a tag; empty when the tag is unused.
    #[must_use]
    pub fn tag_postings(&self, tag: &str) -> &[usize] {
        self.tags.get(tag).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn difficulty_postings(&self, difficulty: Difficulty) -> &[usize] {
        self.difficulty.get(&difficulty).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn philosophy_postings(&self, philosophy: Philosophy) -> &[usize] {
        self.philosophy.get(&philosophy).map_or(&[], Vec::as_slice)
    }
}

/// Intersect two sorted postings lists, preserving order.
#[must_use]
pub fn intersect(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
