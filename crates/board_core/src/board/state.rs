// Board slot state
use crate::catalog::ChampionRecord;
use std::sync::Arc;

/// Number of hex cells on the board (4 rows x 7)
pub const BOARD_SLOTS: usize = 28;

pub type Slot = Option<Arc<ChampionRecord>>;

/// Fixed 28-slot board.
///
/// The same champion may sit in several slots; nothing here checks the
/// catalog. Slot indices outside `0..BOARD_SLOTS` are programming errors and
/// panic: every caller derives indices from the fixed grid, and user-supplied
/// numbers must be checked with [`BoardState::is_valid_slot`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    slots: [Slot; BOARD_SLOTS],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Empty board
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| None) }
    }

    pub fn from_slots(slots: [Slot; BOARD_SLOTS]) -> Self {
        Self { slots }
    }

    /// Whether `index` names one of the 28 slots. Check user input with this
    /// before calling the slot operations, which panic out of range.
    pub fn is_valid_slot(index: usize) -> bool {
        index < BOARD_SLOTS
    }

    /// Put `champion` in `slot`, replacing whatever was there.
    pub fn place(&mut self, slot: usize, champion: Arc<ChampionRecord>) {
        Self::check_slot(slot);
        self.slots[slot] = Some(champion);
    }

    /// Empty `slot`. Clearing an empty slot does nothing.
    pub fn clear(&mut self, slot: usize) {
        Self::check_slot(slot);
        self.slots[slot] = None;
    }

    /// Exchange two slots, empties included.
    pub fn swap(&mut self, a: usize, b: usize) {
        Self::check_slot(a);
        Self::check_slot(b);
        self.slots.swap(a, b);
    }

    /// Empty every slot.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    /// Lowest empty slot, used by click-to-place.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Occupant of `index`, `None` when empty. Panics out of range.
    pub fn slot(&self, index: usize) -> Option<&Arc<ChampionRecord>> {
        Self::check_slot(index);
        self.slots[index].as_ref()
    }

    /// All 28 slots in board order
    pub fn slots(&self) -> &[Slot; BOARD_SLOTS] {
        &self.slots
    }

    /// Occupied slots in index order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Arc<ChampionRecord>)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| s.as_ref().map(|c| (i, c)))
    }

    /// Occupied slots, duplicates counted
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Champion names per slot, `None` for empty cells.
    pub fn slot_names(&self) -> Vec<Option<String>> {
        self.slots.iter().map(|s| s.as_ref().map(|c| c.name.clone())).collect()
    }

    fn check_slot(index: usize) {
        assert!(index < BOARD_SLOTS, "slot index {} out of range 0..{}", index, BOARD_SLOTS);
    }
}
