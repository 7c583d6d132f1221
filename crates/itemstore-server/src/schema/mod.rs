//! API schema types for request/response definitions.
//!
//! Responses serialize [`itemstore_storage::Item`] directly; only request
//! payloads need their own types.

pub mod items;
