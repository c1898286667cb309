use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("\"{0}\" is not a valid message id")]
    InvalidId(String),

    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("message store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Short kind name reported in the API error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::InvalidId(_) => "InvalidIdError",
            StoreError::Sqlite(_) | StoreError::Poisoned => "StorageError",
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
