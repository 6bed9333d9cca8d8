use super::backend::BlobBackend;
use super::error::StoreError;
use super::format::{
    decode_blob, encode_blob, CompositionBlob, SavedComposition, DEFAULT_STORAGE_KEY,
};
use crate::board::BoardState;
use crate::catalog::Catalog;

/// Named board snapshots kept in a single blob.
///
/// Every call reads the blob; save and delete write it back whole. Two
/// processes sharing one blob can lose each other's updates.
pub struct CompositionStore<B: BlobBackend> {
    backend: B,
    key: String,
}

impl<B: BlobBackend> CompositionStore<B> {
    /// Store under the default `tftTeams` key
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Store under a custom key. Stores with different keys never see each
    /// other's compositions, even on the same backend.
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Blob key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Save `board` under `name`, replacing any earlier entry.
    ///
    /// The name is stored exactly as given; it only has to contain something
    /// besides whitespace. Blank names are rejected before the blob is touched.
    pub fn save(&mut self, name: &str, board: &BoardState) -> Result<String, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidName);
        }

        let mut blob = self.read_blob()?;
        let replaced = blob.insert(name.to_string(), SavedComposition::from_board(board)).is_some();
        self.write_blob(&blob)?;

        tracing::info!(
            replaced,
            "Saved composition {:?} ({} champions)",
            name,
            board.occupied_count()
        );
        Ok(name.to_string())
    }

    /// Load `name` (exact match) and resolve it through `catalog`.
    pub fn load(&self, name: &str, catalog: &Catalog) -> Result<BoardState, StoreError> {
        let entry =
            self.entry(name)?.ok_or_else(|| StoreError::NotFound { name: name.to_string() })?;
        let board = entry.to_board(catalog);
        tracing::info!("Loaded composition {:?}", name);
        Ok(board)
    }

    /// Raw snapshot for `name`, if present
    pub fn entry(&self, name: &str) -> Result<Option<SavedComposition>, StoreError> {
        Ok(self.read_blob()?.remove(name))
    }

    /// Saved names. Sorted, but callers should not rely on the order.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_blob()?.into_keys().collect())
    }

    /// Every saved name with its snapshot, from a single read of the blob.
    pub fn entries(&self) -> Result<Vec<(String, SavedComposition)>, StoreError> {
        Ok(self.read_blob()?.into_iter().collect())
    }

    /// Remove `name`. Returns whether an entry existed; absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Result<bool, StoreError> {
        let mut blob = self.read_blob()?;
        if blob.remove(name).is_none() {
            tracing::debug!("Delete of unknown composition {:?} ignored", name);
            return Ok(false);
        }
        self.write_blob(&blob)?;
        tracing::info!("Deleted composition {:?}", name);
        Ok(true)
    }

    fn read_blob(&self) -> Result<CompositionBlob, StoreError> {
        match self.backend.read(&self.key)? {
            Some(raw) => decode_blob(&raw),
            None => Ok(CompositionBlob::new()),
        }
    }

    fn write_blob(&mut self, blob: &CompositionBlob) -> Result<(), StoreError> {
        let raw = encode_blob(blob)?;
        self.backend.write(&self.key, &raw)
    }
}
