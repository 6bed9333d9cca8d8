//! Board session
//!
//! `Session` owns the live board for one user: the shared catalog, the 28 slots,
//! the synergy tally derived from them and the composition store. The
//! presentation layer drives it with slot-indexed commands and reads back the
//! board, the tally and the saved-name list to render.

use std::sync::Arc;

use crate::board::{BoardState, BoardStats, DragPayload};
use crate::catalog::{Catalog, ChampionRecord};
use crate::error::{BoardError, Result};
use crate::store::{BlobBackend, CompositionStore, SavedComposition, StoreError};
use crate::synergy::{SynergyCalculator, SynergyTally};

pub struct Session<B: BlobBackend> {
    catalog: Arc<Catalog>,
    board: BoardState,
    synergies: SynergyTally,
    store: CompositionStore<B>,
}

impl<B: BlobBackend> Session<B> {
    /// Start with an empty board
    pub fn new(catalog: Arc<Catalog>, store: CompositionStore<B>) -> Self {
        Self { catalog, board: BoardState::new(), synergies: SynergyTally::NoChampions, store }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Tally for the current board
    pub fn synergies(&self) -> &SynergyTally {
        &self.synergies
    }

    pub fn stats(&self) -> Option<BoardStats> {
        BoardStats::from_board(&self.board)
    }

    pub fn store(&self) -> &CompositionStore<B> {
        &self.store
    }

    /// Resolve a champion name through the catalog
    pub fn champion(&self, name: &str) -> Result<Arc<ChampionRecord>> {
        self.catalog
            .find(name)
            .cloned()
            .ok_or_else(|| BoardError::UnknownChampion(name.to_string()))
    }

    // ========================
    // Board commands
    // ========================

    pub fn place(&mut self, slot: usize, champion: Arc<ChampionRecord>) {
        tracing::debug!(slot, champion = %champion.name, "place");
        self.board.place(slot, champion);
        self.refresh();
    }

    pub fn clear(&mut self, slot: usize) {
        tracing::debug!(slot, "clear");
        self.board.clear(slot);
        self.refresh();
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        tracing::debug!(a, b, "swap");
        self.board.swap(a, b);
        self.refresh();
    }

    pub fn reset(&mut self) {
        tracing::debug!("reset");
        self.board.reset();
        self.refresh();
    }

    pub fn drop_payload(&mut self, payload: DragPayload, target: usize) {
        tracing::debug!(?payload, target, "drop");
        self.board.drop_payload(payload, target);
        self.refresh();
    }

    /// Click on a catalog entry: fill the first empty slot.
    /// Returns the slot used, `None` when the board is full.
    pub fn click_place(&mut self, champion: Arc<ChampionRecord>) -> Option<usize> {
        let slot = self.board.place_first_empty(champion);
        match slot {
            Some(slot) => {
                tracing::debug!(slot, "click place");
                self.refresh();
            }
            None => tracing::debug!("click place ignored, board full"),
        }
        slot
    }

    /// Click-to-place by catalog name
    pub fn add_by_name(&mut self, name: &str) -> Result<Option<usize>> {
        let champion = self.champion(name)?;
        Ok(self.click_place(champion))
    }

    // ========================
    // Saved compositions
    // ========================

    /// Save the live board under `name` as given. Returns the name used.
    pub fn save(&mut self, name: &str) -> std::result::Result<String, StoreError> {
        self.store.save(name, &self.board)
    }

    /// Replace the live board with a saved composition.
    pub fn load(&mut self, name: &str) -> std::result::Result<(), StoreError> {
        self.board = self.store.load(name, &self.catalog)?;
        self.refresh();
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> std::result::Result<bool, StoreError> {
        self.store.delete(name)
    }

    pub fn saved_names(&self) -> std::result::Result<Vec<String>, StoreError> {
        self.store.list()
    }

    pub fn saved_entry(
        &self,
        name: &str,
    ) -> std::result::Result<Option<SavedComposition>, StoreError> {
        self.store.entry(name)
    }

    /// Names with their snapshots, for a load dialog showing save times
    pub fn saved_entries(
        &self,
    ) -> std::result::Result<Vec<(String, SavedComposition)>, StoreError> {
        self.store.entries()
    }

    fn refresh(&mut self) {
        self.synergies = SynergyCalculator::compute(&self.board, self.catalog.synergies());
    }
}
