use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CatalogError;

/// Tier boundaries for one trait, e.g. `[2, 4, 6]`.
///
/// Thresholds are non-empty, positive and strictly ascending. Deserialization
/// goes through [`SynergyDefinition::new`] so a loaded catalog can never hold a
/// definition that breaks tier lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDefinition")]
pub struct SynergyDefinition {
    thresholds: Vec<u32>,
}

#[derive(Deserialize)]
struct RawDefinition {
    thresholds: Vec<u32>,
}

impl TryFrom<RawDefinition> for SynergyDefinition {
    type Error = CatalogError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        Self::new(raw.thresholds)
    }
}

impl SynergyDefinition {
    pub fn new(thresholds: Vec<u32>) -> Result<Self, CatalogError> {
        if thresholds.is_empty() {
            return Err(CatalogError::InvalidThresholds("threshold list is empty".to_string()));
        }
        if thresholds.contains(&0) {
            return Err(CatalogError::InvalidThresholds("thresholds must be positive".to_string()));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(CatalogError::InvalidThresholds(format!(
                "thresholds must be strictly ascending: {:?}",
                thresholds
            )));
        }
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    /// Number of tiers reached by `count` (0 = inactive).
    pub fn tier_for(&self, count: u32) -> usize {
        self.thresholds.iter().take_while(|&&t| t <= count).count()
    }

    /// Threshold shown next to the count: the next unreached one, or the
    /// final threshold once the trait is maxed out.
    pub fn display_threshold(&self, count: u32) -> u32 {
        let tier = self.tier_for(count);
        match self.thresholds.get(tier) {
            Some(&next) => next,
            None => self.max_threshold(),
        }
    }

    pub fn max_threshold(&self) -> u32 {
        // non-empty by construction
        self.thresholds[self.thresholds.len() - 1]
    }

    pub fn tier_count(&self) -> usize {
        self.thresholds.len()
    }
}

/// Trait name -> definition
pub type SynergyDefinitions = HashMap<String, SynergyDefinition>;
