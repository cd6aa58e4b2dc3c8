pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod normalize;
pub mod search;
pub mod snapshot;
pub mod stats;

pub use error::{EthicaError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
