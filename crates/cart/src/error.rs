//! Error types for snapshot storage.

/// Error type for snapshot store operations.
///
/// These never escape a [`crate::CartStore`] operation: a failed read
/// degrades to an empty cart, a failed write is logged and the in-memory
/// state remains authoritative.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
