use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Composition name is empty")]
    InvalidName,

    #[error("No saved composition named {name:?}")]
    NotFound { name: String },
}

impl StoreError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Io(_) => true,
            StoreError::NotFound { .. } => true,
            StoreError::InvalidName => true,
            StoreError::Serialization(_) => false,
        }
    }
}
