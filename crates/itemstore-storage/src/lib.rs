//! In-memory item storage for the itemstore service.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: ItemId and Item record types
//! - [`memory`]: Records (unlocked map + id counter) and InMemoryStore, the
//!   mutex-guarded store shared by HTTP handlers

pub mod error;
pub mod memory;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::{InMemoryStore, Records};
pub use types::{Item, ItemId};
