//! Champion catalog
//!
//! The catalog is read-only input: an ordered champion list plus the trait
//! thresholds used by the synergy calculator. It is loaded once, either from a
//! JSON file or from the demo set embedded in the binary, and shared behind
//! `Arc` for the lifetime of a session.
//!
//! ```json
//! {
//!   "champions": [{ "name": "Ahri", "cost": 4, "traits": ["Arcanist", "Spirit"] }],
//!   "synergies": { "Arcanist": { "thresholds": [2, 4, 6] } }
//! }
//! ```

pub mod champion;
pub mod synergy_def;

pub use champion::{ChampionRecord, CostTier};
pub use synergy_def::{SynergyDefinition, SynergyDefinitions};

use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Demo catalog compiled into the binary
pub const DEMO_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid cost tier: {0} (expected 1-5)")]
    InvalidCost(u8),

    #[error("Invalid synergy thresholds: {0}")]
    InvalidThresholds(String),
}

#[derive(Deserialize)]
struct RawCatalog {
    champions: Vec<ChampionRecord>,
    #[serde(default)]
    synergies: SynergyDefinitions,
}

/// Ordered champions and trait definitions
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    champions: Vec<Arc<ChampionRecord>>,
    synergies: SynergyDefinitions,
}

impl Catalog {
    pub fn new(champions: Vec<ChampionRecord>, synergies: SynergyDefinitions) -> Self {
        Self { champions: champions.into_iter().map(Arc::new).collect(), synergies }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let catalog = Self::new(raw.champions, raw.synergies);
        tracing::debug!(
            champions = catalog.champions.len(),
            traits = catalog.synergies.len(),
            "catalog parsed"
        );
        Ok(catalog)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!("Loaded catalog from {}", path.display());
        Ok(catalog)
    }

    /// Embedded demo catalog, parsed once per process.
    pub fn demo() -> Result<Arc<Catalog>, CatalogError> {
        static DEMO: OnceLock<Arc<Catalog>> = OnceLock::new();
        Self::parse_once(&DEMO, DEMO_CATALOG_JSON)
    }

    /// Parse `json` into `cell` on first use. A parse failure is returned and
    /// leaves the cell empty, so no empty catalog is ever cached.
    fn parse_once(cell: &OnceLock<Arc<Catalog>>, json: &str) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = cell.get() {
            return Ok(Arc::clone(catalog));
        }
        let parsed = Arc::new(Self::from_json_str(json).inspect_err(|e| {
            tracing::error!("Embedded catalog is invalid: {}", e);
        })?);
        Ok(Arc::clone(cell.get_or_init(|| parsed)))
    }

    /// All champions in catalog order
    pub fn champions(&self) -> &[Arc<ChampionRecord>] {
        &self.champions
    }

    /// Trait thresholds keyed by trait name
    pub fn synergies(&self) -> &SynergyDefinitions {
        &self.synergies
    }

    /// Exact-name lookup. The first record wins if a name repeats.
    pub fn find(&self, name: &str) -> Option<&Arc<ChampionRecord>> {
        self.champions.iter().find(|c| c.name == name)
    }

    /// Whether a champion named `name` exists
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Thresholds for `trait_name`; `None` for traits the catalog does not define.
    pub fn definition(&self, trait_name: &str) -> Option<&SynergyDefinition> {
        self.synergies.get(trait_name)
    }

    /// Number of champions
    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}
