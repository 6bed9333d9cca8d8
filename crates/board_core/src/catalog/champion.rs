// Champion records as shipped in the catalog
use serde::{Deserialize, Serialize};
use std::fmt;

use super::CatalogError;

/// Shop cost tier (1~5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CostTier {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl CostTier {
    pub const ALL: [CostTier; 5] =
        [CostTier::One, CostTier::Two, CostTier::Three, CostTier::Four, CostTier::Five];

    /// Gold value of the tier
    pub fn gold(&self) -> u32 {
        *self as u32
    }

    /// Star label used by the stats panel
    pub fn stars(&self) -> String {
        format!("{}★", self.gold())
    }
}

impl TryFrom<u8> for CostTier {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CostTier::One),
            2 => Ok(CostTier::Two),
            3 => Ok(CostTier::Three),
            4 => Ok(CostTier::Four),
            5 => Ok(CostTier::Five),
            other => Err(CatalogError::InvalidCost(other)),
        }
    }
}

impl From<CostTier> for u8 {
    fn from(tier: CostTier) -> Self {
        tier as u8
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.gold())
    }
}

/// A champion piece. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionRecord {
    /// Unique identifier, also the display name
    pub name: String,
    /// Shop cost
    pub cost: CostTier,
    /// Trait tags in catalog order
    pub traits: Vec<String>,
}

impl ChampionRecord {
    pub fn new(name: impl Into<String>, cost: CostTier, traits: &[&str]) -> Self {
        Self {
            name: name.into(),
            cost,
            traits: traits.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.traits.iter().any(|t| t == trait_name)
    }

    /// Short label for a board cell: the first two traits.
    pub fn trait_label(&self) -> String {
        self.traits.iter().take(2).map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}
