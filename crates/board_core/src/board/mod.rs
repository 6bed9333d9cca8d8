// Board slots, drag payloads and cost summary

pub mod drag;
pub mod state;
pub mod stats;

pub use drag::DragPayload;
pub use state::{BoardState, Slot, BOARD_SLOTS};
pub use stats::BoardStats;
