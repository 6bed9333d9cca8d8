// Trait synergy computation
use crate::board::BoardState;
use crate::catalog::SynergyDefinitions;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One active trait on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitSynergy {
    /// Trait name
    pub trait_name: String,
    /// Unique champions carrying the trait
    pub count: u32,
    /// Reached tier, 0 = inactive
    pub tier: usize,
    /// Denominator shown next to the count
    pub display_threshold: u32,
}

impl TraitSynergy {
    pub fn is_active(&self) -> bool {
        self.tier > 0
    }

    /// "count/threshold", e.g. "2/4"
    pub fn progress(&self) -> String {
        format!("{}/{}", self.count, self.display_threshold)
    }
}

/// Result of a synergy pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SynergyTally {
    /// Board has no champions
    NoChampions,
    /// Known traits, highest count first
    Traits(Vec<TraitSynergy>),
}

impl SynergyTally {
    pub fn traits(&self) -> &[TraitSynergy] {
        match self {
            SynergyTally::NoChampions => &[],
            SynergyTally::Traits(traits) => traits,
        }
    }

    pub fn get(&self, trait_name: &str) -> Option<&TraitSynergy> {
        self.traits().iter().find(|t| t.trait_name == trait_name)
    }

    pub fn active(&self) -> impl Iterator<Item = &TraitSynergy> {
        self.traits().iter().filter(|t| t.is_active())
    }
}

/// Synergy calculator
pub struct SynergyCalculator;

impl SynergyCalculator {
    /// Count traits over the unique champions on the board and resolve tiers.
    ///
    /// A champion placed in several slots counts once. Traits without a
    /// definition are left out. Ties keep the order in which traits were first
    /// seen walking the board from slot 0.
    pub fn compute(board: &BoardState, definitions: &SynergyDefinitions) -> SynergyTally {
        if board.is_empty() {
            return SynergyTally::NoChampions;
        }

        let mut seen = HashSet::new();
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, u32> = HashMap::new();

        for (_, champ) in board.occupied() {
            if !seen.insert(champ.name.as_str()) {
                continue;
            }
            for trait_name in &champ.traits {
                let count = counts.entry(trait_name.as_str()).or_insert_with(|| {
                    order.push(trait_name.as_str());
                    0
                });
                *count += 1;
            }
        }

        let mut traits: Vec<TraitSynergy> = order
            .into_iter()
            .filter_map(|name| {
                let def = definitions.get(name)?;
                let count = counts[name];
                Some(TraitSynergy {
                    trait_name: name.to_string(),
                    count,
                    tier: def.tier_for(count),
                    display_threshold: def.display_threshold(count),
                })
            })
            .collect();

        // stable: equal counts keep first-seen order
        traits.sort_by(|a, b| b.count.cmp(&a.count));

        tracing::trace!(traits = traits.len(), "synergies recomputed");
        SynergyTally::Traits(traits)
    }
}

/// Free-function form of [`SynergyCalculator::compute`].
pub fn compute_synergies(board: &BoardState, definitions: &SynergyDefinitions) -> SynergyTally {
    SynergyCalculator::compute(board, definitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::small_catalog;
    use crate::catalog::{ChampionRecord, CostTier, SynergyDefinition};
    use std::sync::Arc;

    #[test]
    fn test_empty_board_reports_no_champions() {
        let catalog = small_catalog();
        let tally = compute_synergies(&BoardState::new(), catalog.synergies());
        assert_eq!(tally, SynergyTally::NoChampions);
        assert!(tally.traits().is_empty());
    }

    #[test]
    fn test_two_champion_scenario() {
        let catalog = small_catalog();
        let mut board = BoardState::new();
        board.place(0, catalog.find("A").unwrap().clone());
        board.place(1, catalog.find("B").unwrap().clone());

        let tally = compute_synergies(&board, catalog.synergies());

        let x = tally.get("X").unwrap();
        assert_eq!((x.count, x.tier), (2, 1));
        assert_eq!(x.progress(), "2/4");
        assert!(x.is_active());

        let y = tally.get("Y").unwrap();
        assert_eq!((y.count, y.tier), (1, 0));
        assert_eq!(y.progress(), "1/2");
        assert!(!y.is_active());

        assert_eq!(tally.traits()[0].trait_name, "X");
        assert_eq!(tally.active().count(), 1);
    }

    #[test]
    fn test_duplicates_count_once() {
        let catalog = small_catalog();
        let a = catalog.find("A").unwrap().clone();

        let mut single = BoardState::new();
        single.place(0, a.clone());

        let mut doubled = single.clone();
        doubled.place(13, a);

        assert_eq!(
            compute_synergies(&single, catalog.synergies()),
            compute_synergies(&doubled, catalog.synergies())
        );
    }

    #[test]
    fn test_unknown_traits_dropped() {
        let catalog = small_catalog();
        let mut board = BoardState::new();
        board.place(0, Arc::new(ChampionRecord::new("Q", CostTier::One, &["Unknown", "X"])));

        let tally = compute_synergies(&board, catalog.synergies());
        assert!(tally.get("Unknown").is_none());
        assert_eq!(tally.traits().len(), 1);
    }

    #[test]
    fn test_board_with_only_unknown_traits_is_not_empty_state() {
        let catalog = small_catalog();
        let mut board = BoardState::new();
        board.place(0, Arc::new(ChampionRecord::new("Q", CostTier::One, &["Unknown"])));

        assert_eq!(compute_synergies(&board, catalog.synergies()), SynergyTally::Traits(vec![]));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let catalog = small_catalog();
        let mut board = BoardState::new();
        // C brings Y then Z; A brings X then Y
        board.place(0, catalog.find("C").unwrap().clone());
        board.place(1, catalog.find("A").unwrap().clone());

        let tally = compute_synergies(&board, catalog.synergies());
        let names: Vec<_> = tally.traits().iter().map(|t| t.trait_name.as_str()).collect();
        assert_eq!(names, vec!["Y", "Z", "X"]);
    }

    #[test]
    fn test_max_tier_saturates() {
        let mut defs = SynergyDefinitions::new();
        defs.insert("X".to_string(), SynergyDefinition::new(vec![1, 2]).unwrap());

        let mut board = BoardState::new();
        for (i, name) in ["P", "Q", "R"].iter().enumerate() {
            board.place(i, Arc::new(ChampionRecord::new(*name, CostTier::One, &["X"])));
        }

        let x = compute_synergies(&board, &defs).get("X").cloned().unwrap();
        assert_eq!(x.tier, 2);
        assert_eq!(x.progress(), "3/2");
    }
}
