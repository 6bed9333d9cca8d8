// Team cost summary
use super::state::{BoardState, BOARD_SLOTS};
use crate::catalog::CostTier;
use serde::Serialize;
use std::collections::BTreeMap;

/// Cost summary of the board. Every occupied slot counts, duplicates included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardStats {
    pub champion_count: usize,
    pub total_cost: u32,
    pub average_cost: f32,
    pub cost_breakdown: BTreeMap<CostTier, usize>,
}

impl BoardStats {
    /// `None` for an empty board.
    pub fn from_board(board: &BoardState) -> Option<Self> {
        let mut champion_count = 0;
        let mut total_cost = 0;
        let mut cost_breakdown = BTreeMap::new();

        for (_, champ) in board.occupied() {
            champion_count += 1;
            total_cost += champ.cost.gold();
            *cost_breakdown.entry(champ.cost).or_insert(0) += 1;
        }

        if champion_count == 0 {
            return None;
        }

        Some(Self {
            champion_count,
            total_cost,
            average_cost: total_cost as f32 / champion_count as f32,
            cost_breakdown,
        })
    }

    /// "12/28"
    pub fn count_label(&self) -> String {
        format!("{}/{}", self.champion_count, BOARD_SLOTS)
    }

    /// "1★: 2 | 3★: 1"
    pub fn cost_breakdown_label(&self) -> String {
        CostTier::ALL
            .iter()
            .filter_map(|tier| {
                self.cost_breakdown.get(tier).map(|n| format!("{}: {}", tier.stars(), n))
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
