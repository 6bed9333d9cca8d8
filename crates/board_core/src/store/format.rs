// On-disk schema of the composition blob
//
// One key (default "tftTeams") holds a JSON object:
//   { "<name>": { "board": [<champion name> | null; 28], "savedAt": "<RFC 3339 UTC>" } }

use super::error::StoreError;
use crate::board::{BoardState, BOARD_SLOTS};
use crate::catalog::Catalog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default storage key of the blob
pub const DEFAULT_STORAGE_KEY: &str = "tftTeams";

/// Saved board snapshot, champions stored by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedComposition {
    /// One entry per slot, `null` for empty cells
    pub board: Vec<Option<String>>,

    /// Save time
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

impl SavedComposition {
    pub fn from_board(board: &BoardState) -> Self {
        Self { board: board.slot_names(), saved_at: Utc::now() }
    }

    /// Rebuild a board through the catalog.
    ///
    /// Names the catalog no longer knows become empty slots. Short snapshots
    /// are padded with empty slots and entries past the last slot are ignored.
    pub fn to_board(&self, catalog: &Catalog) -> BoardState {
        if self.board.len() != BOARD_SLOTS {
            tracing::warn!(
                "Saved board has {} slots, expected {}",
                self.board.len(),
                BOARD_SLOTS
            );
        }

        let mut board = BoardState::new();
        for (slot, name) in self.board.iter().take(BOARD_SLOTS).enumerate() {
            let Some(name) = name else { continue };
            match catalog.find(name) {
                Some(champion) => board.place(slot, champion.clone()),
                None => tracing::warn!("Dropping unknown champion {:?} from slot {}", name, slot),
            }
        }
        board
    }

    /// Stored champion names that the catalog cannot resolve
    pub fn stale_names<'a>(&'a self, catalog: &Catalog) -> Vec<&'a str> {
        self.board.iter().flatten().map(String::as_str).filter(|n| !catalog.contains(n)).collect()
    }
}

/// Whole blob: composition name -> snapshot
pub type CompositionBlob = BTreeMap<String, SavedComposition>;

pub fn decode_blob(raw: &str) -> Result<CompositionBlob, StoreError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_blob(blob: &CompositionBlob) -> Result<String, StoreError> {
    Ok(serde_json::to_string(blob)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::small_catalog;

    #[test]
    fn test_schema_field_names() {
        let catalog = small_catalog();
        let mut board = BoardState::new();
        board.place(1, catalog.find("A").unwrap().clone());

        let json = serde_json::to_value(SavedComposition::from_board(&board)).unwrap();
        let slots = json["board"].as_array().unwrap();
        assert_eq!(slots.len(), BOARD_SLOTS);
        assert!(slots[0].is_null());
        assert_eq!(slots[1], "A");
        assert!(json["savedAt"].is_string());
    }

    #[test]
    fn test_stale_names_become_empty_slots() {
        let catalog = small_catalog();
        let mut names = vec![None; BOARD_SLOTS];
        names[0] = Some("A".to_string());
        names[1] = Some("Retired".to_string());
        let saved = SavedComposition { board: names, saved_at: Utc::now() };

        let board = saved.to_board(&catalog);
        assert_eq!(board.slot(0).unwrap().name, "A");
        assert!(board.slot(1).is_none());
        assert_eq!(saved.stale_names(&catalog), vec!["Retired"]);
    }

    #[test]
    fn test_wrong_length_snapshot_is_tolerated() {
        let catalog = small_catalog();
        let short =
            SavedComposition { board: vec![None, Some("B".to_string())], saved_at: Utc::now() };
        let board = short.to_board(&catalog);
        assert_eq!(board.slot(1).unwrap().name, "B");
        assert_eq!(board.occupied_count(), 1);

        let mut long = vec![Some("A".to_string()); BOARD_SLOTS + 3];
        long[0] = None;
        let board = SavedComposition { board: long, saved_at: Utc::now() }.to_board(&catalog);
        assert_eq!(board.occupied_count(), BOARD_SLOTS - 1);
    }

    #[test]
    fn test_decode_reads_saved_at_timestamp() {
        let raw = r#"{"Mine":{"board":[null,"C"],"savedAt":"2026-10-19T08:30:00Z"}}"#;
        let blob = decode_blob(raw).unwrap();
        let entry = &blob["Mine"];
        assert_eq!(entry.saved_at.to_rfc3339(), "2026-10-19T08:30:00+00:00");
        assert_eq!(entry.board[1].as_deref(), Some("C"));

        assert!(matches!(decode_blob("not json"), Err(StoreError::Serialization(_))));
    }
}
