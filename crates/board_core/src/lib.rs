//! # board_core - Team Composition Board
//!
//! Core of the team-composition board: a fixed 28-slot board, trait synergy
//! computation over the champions placed on it, and named compositions saved
//! to a single durable blob.
//!
//! ## Features
//! - Slot state machine (place / clear / swap / reset / click-to-place)
//! - Synergy tiers with duplicate-insensitive trait counts
//! - Composition store over a pluggable key-value blob backend
//! - Debounced catalog search on tokio

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod session;
pub mod store;
pub mod synergy;

pub use board::{BoardState, BoardStats, DragPayload, BOARD_SLOTS};
pub use catalog::{Catalog, CatalogError, ChampionRecord, CostTier, SynergyDefinition};
pub use config::{BoardConfig, ConfigError};
pub use error::{BoardError, Result};
pub use search::{filter_champions, group_by_cost, CatalogSearch, Debouncer, SearchResults};
pub use session::Session;
pub use store::{
    BlobBackend, CompositionStore, FileBackend, MemoryBackend, SavedComposition, StoreError,
};
pub use synergy::{compute_synergies, SynergyCalculator, SynergyTally, TraitSynergy};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
