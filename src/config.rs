//! Configuration loading.
//!
//! Defaults, then the global config file, then environment overrides.
//! Config files are partial: every section and key is optional and
//! merges over whatever came before.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EthicaError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default result limit for `search` when `--limit` is not given.
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { default_limit: 20 }
    }
}

impl Config {
    /// Load config: defaults -> global file (or explicit path) -> env.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("ETHICA_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            } else {
                return Err(EthicaError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        } else if let Some(patch) = Self::load_global()? {
            config.merge_patch(patch);
        }

        config.apply_env_overrides()?;
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("ethica/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|err| EthicaError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| EthicaError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(catalog) = patch.catalog {
            if let Some(path) = catalog.path {
                self.catalog.path = Some(path);
            }
        }
        if let Some(search) = patch.search {
            if let Some(limit) = search.default_limit {
                self.search.default_limit = limit;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(path) = std::env::var("ETHICA_CATALOG") {
            if !path.trim().is_empty() {
                self.catalog.path = Some(PathBuf::from(path));
            }
        }
        if let Ok(limit) = std::env::var("ETHICA_DEFAULT_LIMIT") {
            self.search.default_limit = limit.trim().parse().map_err(|_| {
                EthicaError::Config(format!("ETHICA_DEFAULT_LIMIT is not a number: '{limit}'"))
            })?;
        }
        Ok(())
    }
}

/// Partial config as read from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    catalog: Option<CatalogPatch>,
    search: Option<SearchPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogPatch {
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    default_limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.search.default_limit, 20);
    }

    #[test]
    fn explicit_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[catalog]\npath = \"/data/catalog.json\"\n\n[search]\ndefault_limit = 5\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(
            config.catalog.path.as_deref(),
            Some(Path::new("/data/catalog.json"))
        );
        assert_eq!(config.search.default_limit, 5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\ndefault_limit = 7\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.search.default_limit, 7);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, EthicaError::Config(_)));
    }

    #[test]
    fn bad_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [ valid toml").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, EthicaError::Config(_)));
    }
}
