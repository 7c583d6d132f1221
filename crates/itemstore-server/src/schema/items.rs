//! Item request types.

use itemstore_storage::ItemId;
use serde::Deserialize;

use crate::error::ApiError;

/// Body of `POST /items` and `PUT /items/{id}`.
///
/// Shaped like a stored item. `id` is accepted so that a full item can be
/// sent back unchanged, but the server always overrides it.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub name: String,
}

impl ItemPayload {
    /// Decodes the first JSON value of a raw request body; anything after it
    /// is not read. Any decode failure becomes a 400 carrying the decoder's
    /// message.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let mut de = serde_json::Deserializer::from_slice(body);
        Ok(ItemPayload::deserialize(&mut de)?)
    }
}
