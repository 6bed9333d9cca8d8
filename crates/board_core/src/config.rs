//! Board configuration
//!
//! ```yaml
//! store_dir: ./saves
//! storage_key: tftTeams
//! search_debounce_ms: 200
//! catalog_path: data/catalog.json   # optional, embedded demo catalog otherwise
//! ```

use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory holding the composition blob
    pub store_dir: PathBuf,
    /// Blob key (file stem) for saved compositions
    pub storage_key: String,
    /// Search keystroke settle time
    pub search_debounce_ms: u64,
    /// Catalog JSON; `None` uses the embedded demo catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("saves"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            search_debounce_ms: 200,
            catalog_path: None,
        }
    }
}

impl BoardConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Read `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_yaml_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
