// Drag-and-drop payloads
use super::state::BoardState;
use crate::catalog::ChampionRecord;
use std::sync::Arc;

/// What the pointer is carrying when it is released over a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// Dragged in from the catalog list
    Champion(Arc<ChampionRecord>),
    /// Dragged from another board slot
    Slot(usize),
}

impl BoardState {
    /// Start a drag from `slot`. Empty slots cannot be dragged.
    pub fn drag_from(&self, slot: usize) -> Option<DragPayload> {
        self.slot(slot).map(|_| DragPayload::Slot(slot))
    }

    /// Release `payload` over `target`.
    ///
    /// A catalog champion is placed (overwriting the occupant); a slot payload
    /// swaps source and target.
    pub fn drop_payload(&mut self, payload: DragPayload, target: usize) {
        match payload {
            DragPayload::Champion(champion) => self.place(target, champion),
            DragPayload::Slot(source) => self.swap(source, target),
        }
    }

    /// Click-to-place: put `champion` in the first empty slot.
    ///
    /// Returns the slot used, or `None` when the board is full (board unchanged).
    pub fn place_first_empty(&mut self, champion: Arc<ChampionRecord>) -> Option<usize> {
        let slot = self.first_empty_slot()?;
        self.place(slot, champion);
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::BOARD_SLOTS;
    use super::*;
    use crate::catalog::CostTier;

    fn champ(name: &str) -> Arc<ChampionRecord> {
        Arc::new(ChampionRecord::new(name, CostTier::Two, &["X"]))
    }

    #[test]
    fn test_empty_slot_cannot_be_dragged() {
        let mut board = BoardState::new();
        assert_eq!(board.drag_from(4), None);
        board.place(4, champ("A"));
        assert_eq!(board.drag_from(4), Some(DragPayload::Slot(4)));
    }

    #[test]
    fn test_drop_champion_places() {
        let mut board = BoardState::new();
        board.place(7, champ("A"));
        board.drop_payload(DragPayload::Champion(champ("B")), 7);
        assert_eq!(board.slot(7).unwrap().name, "B");
    }

    #[test]
    fn test_drop_slot_swaps() {
        let mut board = BoardState::new();
        board.place(0, champ("A"));
        board.place(1, champ("B"));
        let payload = board.drag_from(0).unwrap();
        board.drop_payload(payload, 1);
        assert_eq!(board.slot(0).unwrap().name, "B");
        assert_eq!(board.slot(1).unwrap().name, "A");
    }

    #[test]
    fn test_place_first_empty_fills_in_order() {
        let mut board = BoardState::new();
        assert_eq!(board.place_first_empty(champ("A")), Some(0));
        assert_eq!(board.place_first_empty(champ("B")), Some(1));
        board.clear(0);
        assert_eq!(board.place_first_empty(champ("C")), Some(0));
    }

    #[test]
    fn test_place_first_empty_on_full_board() {
        let mut board = BoardState::new();
        for _ in 0..BOARD_SLOTS {
            board.place_first_empty(champ("A"));
        }
        let before = board.clone();
        assert_eq!(board.place_first_empty(champ("B")), None);
        assert_eq!(board, before);
    }
}
