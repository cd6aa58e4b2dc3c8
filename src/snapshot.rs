//! Immutable catalog snapshots and the atomic reload handle.
//!
//! Loading, normalizing, indexing and stats computation happen in one
//! build step; the result is a [`CatalogSnapshot`] that is never
//! mutated afterwards. All query surfaces are `&self` reads, so any
//! number of readers can share a snapshot without coordination. The
//! [`Catalog`] handle is the one place with a synchronization
//! discipline: a reload builds a complete new snapshot off to the
//! side, then swaps the `Arc` under a write lock.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::raw::RawCatalog;
use crate::catalog::types::{EnhancedCategory, EnhancedScenario};
use crate::index::CatalogIndex;
use crate::normalize::{normalize, CatalogWarning, NormalizedCatalog};
use crate::stats::{compute_stats, popular_tags, CatalogStats, TagCount};

/// A fully-indexed, immutable view of a catalog at one point in time.
#[derive(Debug)]
pub struct CatalogSnapshot {
    catalog: NormalizedCatalog,
    index: CatalogIndex,
    stats: CatalogStats,
    warnings: Vec<CatalogWarning>,
    category_positions: HashMap<String, usize>,
    scenario_positions: HashMap<String, usize>,
}

impl CatalogSnapshot {
    /// Build a snapshot from raw records: normalize, index, aggregate.
    /// Record-level problems are collected on the snapshot, never
    /// thrown; a catalog of nothing but bad records builds an empty
    /// snapshot.
    #[must_use]
    pub fn build(raw: RawCatalog) -> Self {
        let (catalog, warnings) = normalize(raw);
        let index = CatalogIndex::build(&catalog);
        let stats = compute_stats(&catalog);

        let category_positions = catalog
            .categories
            .iter()
            .enumerate()
            .map(|(pos, c)| (c.id.clone(), pos))
            .collect();
        let scenario_positions = catalog
            .scenarios
            .iter()
            .enumerate()
            .map(|(pos, s)| (s.id.clone(), pos))
            .collect();

        Self {
            catalog,
            index,
            stats,
            warnings,
            category_positions,
            scenario_positions,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::build(RawCatalog::default())
    }

    /// All scenarios, catalog order.
    #[must_use]
    pub fn scenarios(&self) -> &[EnhancedScenario] {
        &self.catalog.scenarios
    }

    /// All categories, catalog order.
    #[must_use]
    pub fn categories(&self) -> &[EnhancedCategory] {
        &self.catalog.categories
    }

    #[must_use]
    pub fn scenario(&self, id: &str) -> Option<&EnhancedScenario> {
        self.scenario_positions
            .get(id)
            .map(|&pos| &self.catalog.scenarios[pos])
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&EnhancedCategory> {
        self.category_positions
            .get(id)
            .map(|&pos| &self.catalog.categories[pos])
    }

    #[must_use]
    pub fn scenario_at(&self, pos: usize) -> &EnhancedScenario {
        &self.catalog.scenarios[pos]
    }

    /// Cached aggregate stats, computed at build time.
    #[must_use]
    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    /// Problems found while normalizing this catalog.
    #[must_use]
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Tags ranked by usage, count descending then alphabetical.
    #[must_use]
    pub fn popular_tags(&self, limit: Option<usize>) -> Vec<TagCount> {
        popular_tags(&self.index, limit)
    }
}

/// Shared handle over the current snapshot. Cheap to clone; a reload
/// publishes a new snapshot atomically, so readers always see either
/// the old fully-built snapshot or the new one.
#[derive(Clone)]
pub struct Catalog {
    current: Arc<RwLock<Arc<CatalogSnapshot>>>,
}

impl Catalog {
    #[must_use]
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    #[must_use]
    pub fn from_raw(raw: RawCatalog) -> Self {
        Self::new(CatalogSnapshot::build(raw))
    }

    /// Grab the current snapshot. The returned `Arc` stays valid even
    /// if a reload happens while the caller is still reading.
    #[must_use]
    pub fn current(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Build and publish a new snapshot. The build runs outside the
    /// lock; only the pointer swap is serialized.
    pub fn reload(&self, raw: RawCatalog) {
        let snapshot = Arc::new(CatalogSnapshot::build(raw));
        *self.current.write() = snapshot;
        tracing::debug!("catalog snapshot reloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawCatalog {
        serde_json::from_str(
            r#"{
                "categories": [
                    {"id": "c1", "title": "Fairness", "difficulty": "beginner",
                     "metadata": {"primary_philosophy": "utilitarianism"}}
                ],
                "scenarios": [
                    {"id": "s1", "title": "Trolley", "category_id": "c1",
                     "difficulty": "beginner",
                     "metadata": {"philosophical_leaning": "utilitarianism",
                                  "estimated_time": 10, "tags": ["bias"]}}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn build_wires_lookups_and_stats() {
        let snapshot = CatalogSnapshot::build(raw());
        assert_eq!(snapshot.scenarios().len(), 1);
        assert_eq!(snapshot.scenario("s1").unwrap().title, "Trolley");
        assert_eq!(snapshot.category("c1").unwrap().title, "Fairness");
        assert!(snapshot.scenario("missing").is_none());
        assert_eq!(snapshot.stats().total_scenarios, 1);
        assert!(snapshot.warnings().is_empty());
    }

    #[test]
    fn empty_snapshot_is_well_defined() {
        let snapshot = CatalogSnapshot::empty();
        assert!(snapshot.scenarios().is_empty());
        assert_eq!(snapshot.stats().average_estimated_minutes, 0.0);
        assert!(snapshot.popular_tags(None).is_empty());
    }

    #[test]
    fn reload_publishes_new_snapshot_without_touching_old() {
        let catalog = Catalog::from_raw(raw());
        let before = catalog.current();
        assert_eq!(before.stats().total_scenarios, 1);

        catalog.reload(RawCatalog::default());
        let after = catalog.current();
        assert_eq!(after.stats().total_scenarios, 0);
        // The old snapshot is still fully readable.
        assert_eq!(before.stats().total_scenarios, 1);
        assert_eq!(before.scenario("s1").unwrap().id, "s1");
    }

    #[test]
    fn handle_clones_share_the_same_snapshot() {
        let catalog = Catalog::from_raw(raw());
        let other = catalog.clone();
        catalog.reload(RawCatalog::default());
        assert_eq!(other.current().stats().total_scenarios, 0);
    }
}
