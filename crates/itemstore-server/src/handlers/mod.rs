//! HTTP handler modules for the itemstore API.
//!
//! Handlers decode the request body outside the store lock, make exactly one
//! store call, and encode the result after the lock is released.

pub mod items;
