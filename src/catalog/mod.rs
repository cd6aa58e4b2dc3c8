//! Catalog data model.
//!
//! `raw` holds the open-ended records produced by whatever authored the
//! catalog file; they are lenient by design and never cross the
//! normalizer boundary. `types` holds the closed, validated model the
//! rest of the engine consumes.

pub mod raw;
pub mod types;

pub use raw::{RawCatalog, RawCategory, RawScenario};
pub use types::{
    Complexity, Difficulty, EnhancedCategory, EnhancedScenario, Philosophy,
};
