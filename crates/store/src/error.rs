use thiserror::Error;

use stockroom_core::DomainError;

/// Storage error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The file exists but not a single row could be understood.
    #[error("unreadable warehouse table: {0}")]
    Unreadable(String),

    #[error("store lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Domain(#[from] DomainError),
}
