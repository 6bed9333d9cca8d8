// Saved compositions
// A single JSON blob per storage key, read and rewritten whole on every change

pub mod backend;
pub mod error;
pub mod format;
pub mod manager;

pub use backend::{BlobBackend, FileBackend, MemoryBackend};
pub use error::StoreError;
pub use format::{CompositionBlob, SavedComposition, DEFAULT_STORAGE_KEY};
pub use manager::CompositionStore;
