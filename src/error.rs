//! Error handling for ethica.
//!
//! Two error families matter to callers:
//! - [`EthicaError::Validation`]: a catalog record violates an invariant.
//!   During a build these are collected as warnings and the offending
//!   record is excluded; the build itself still succeeds.
//! - [`EthicaError::InvalidFilter`]: the caller supplied a facet value
//!   outside the closed enum set. Surfaced immediately so "no matches"
//!   and "malformed query" stay distinguishable.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ethica operations.
#[derive(Error, Debug)]
pub enum EthicaError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Catalog file not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid {field} filter '{value}' (expected one of: {expected})")]
    InvalidFilter {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),
}

/// Result type alias using EthicaError.
pub type Result<T> = std::result::Result<T, EthicaError>;
