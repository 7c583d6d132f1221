//! HTTP/JSON API server for the itemstore in-memory item collection.
//!
//! Exposes list/create/get/update/delete over `/items`, backed by a single
//! [`itemstore_storage::InMemoryStore`] injected through [`state::AppState`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
