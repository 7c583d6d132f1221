//! Storage error types for itemstore-storage.

use thiserror::Error;

use crate::types::ItemId;

/// Errors produced by storage operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// No item is stored under the given ID.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// The ID counter cannot advance without wrapping.
    #[error("item id space exhausted")]
    IdSpaceExhausted,
}
