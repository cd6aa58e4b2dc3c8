//! Application context shared by all CLI commands.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{EthicaError, Result};
use crate::loader;
use crate::snapshot::Catalog;

/// Everything a command handler needs: loaded config, the catalog
/// handle, and output mode flags.
pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
    pub catalog_path: PathBuf,
    pub robot_mode: bool,
}

impl AppContext {
    /// Resolve config and build the initial catalog snapshot.
    ///
    /// Catalog path precedence: `--catalog` flag, then `ETHICA_CATALOG`
    /// (applied inside `Config::load`), then the config file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        let catalog_path = cli
            .catalog
            .clone()
            .or_else(|| config.catalog.path.clone())
            .ok_or_else(|| {
                EthicaError::MissingConfig(
                    "catalog path (use --catalog, ETHICA_CATALOG, or [catalog] path in config)"
                        .to_string(),
                )
            })?;

        let raw = loader::load_file(&catalog_path)?;
        let catalog = Catalog::from_raw(raw);

        for warning in catalog.current().warnings() {
            tracing::warn!(record = %warning.record, "{warning}");
        }

        Ok(Self {
            config,
            catalog,
            catalog_path,
            robot_mode: cli.robot,
        })
    }
}
