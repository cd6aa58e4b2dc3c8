//! Facet filters for narrowing search results.
//!
//! Filters are typed: an unknown difficulty or philosophy string can
//! only exist on the raw side of [`SearchFilters::parse`], which fails
//! with `InvalidFilter` instead of silently matching nothing. All
//! specified criteria are ANDed, and the tags filter requires a
//! scenario to carry every requested tag.

use crate::catalog::types::{Difficulty, EnhancedCategory, EnhancedScenario, Philosophy};
use crate::error::Result;
use crate::normalize::normalize_tags;

/// Search filters for narrowing results.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Exact difficulty match.
    pub difficulty: Option<Difficulty>,
    /// Scenario leaning or owning category approach match.
    pub philosophy: Option<Philosophy>,
    /// All-match: a scenario must carry every listed tag.
    pub tags: Vec<String>,
}

impl SearchFilters {
    /// Create new empty filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub fn with_philosophy(mut self, philosophy: Philosophy) -> Self {
        self.philosophy = Some(philosophy);
        self
    }

    /// Set the tags filter. Tags are normalized (trimmed, lowercased,
    /// deduplicated) the same way catalog tags are.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = normalize_tags(tags.into_iter().map(Into::into).collect())
            .into_iter()
            .collect();
        self
    }

    /// Parse filters from raw caller strings. This is where an unknown
    /// enum value surfaces as `InvalidFilter` rather than an empty
    /// result set.
    pub fn parse(
        difficulty: Option<&str>,
        philosophy: Option<&str>,
        tags: &[String],
    ) -> Result<Self> {
        let mut filters = Self::new();
        if let Some(d) = difficulty {
            filters.difficulty = Some(d.parse()?);
        }
        if let Some(p) = philosophy {
            filters.philosophy = Some(p.parse()?);
        }
        if !tags.is_empty() {
            filters = filters.with_tags(tags.iter().cloned());
        }
        Ok(filters)
    }

    /// Split a comma-separated tag list as typed on the command line.
    #[must_use]
    pub fn split_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Check if any filters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_none() && self.philosophy.is_none() && self.tags.is_empty()
    }

    /// Check whether a scenario (with its owning category) passes all
    /// filters. Index intersection is the fast path; this is the
    /// reference predicate the indices must agree with.
    #[must_use]
    pub fn matches(&self, scenario: &EnhancedScenario, category: Option<&EnhancedCategory>) -> bool {
        if let Some(difficulty) = self.difficulty {
            if scenario.difficulty != difficulty {
                return false;
            }
        }

        if let Some(philosophy) = self.philosophy {
            let category_match = category.is_some_and(|c| {
                c.primary_philosophy == philosophy || c.approaches.contains(&philosophy)
            });
            if scenario.leaning != philosophy && !category_match {
                return false;
            }
        }

        if !self.tags.is_empty() && !scenario.has_all_tags(&self.tags) {
            return false;
        }

        true
    }
}
