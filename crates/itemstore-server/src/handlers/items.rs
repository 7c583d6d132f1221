//! Item CRUD handlers.

use axum::body::Bytes;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;

use itemstore_storage::{Item, ItemId};

use crate::error::ApiError;
use crate::schema::items::ItemPayload;
use crate::state::AppState;

/// Prefix stripped from the request path to obtain an item ID.
pub const ITEM_PATH_PREFIX: &str = "/items/";

/// The item ID addressed by `/items/{id}`.
///
/// Everything after `/items/` in the request path, percent-decoded and
/// otherwise taken verbatim (no splitting on `/`). `/items/` yields the empty
/// ID, which never matches a stored item. An escape that decodes to invalid
/// UTF-8 is a 400.
#[derive(Debug, Clone)]
pub struct ItemPath(pub ItemId);

impl<S> FromRequestParts<S> for ItemPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .uri
            .path()
            .strip_prefix(ITEM_PATH_PREFIX)
            .unwrap_or_default();
        let id = urlencoding::decode(raw)
            .map_err(|err| ApiError::BadRequest(format!("invalid item id: {err}")))?;
        Ok(ItemPath(ItemId::from(id.into_owned())))
    }
}

/// Lists all items.
///
/// `GET /items`
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

/// Creates an item with a server-assigned ID.
///
/// `POST /items`
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let req = ItemPayload::from_body(&body)?;
    if let Some(ignored) = &req.id {
        tracing::debug!(%ignored, "discarding caller-supplied id on create");
    }

    let item = state.store.create(req.name).await?;
    tracing::info!(id = %item.id, name = %item.name, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /items/{id}`
pub async fn get_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.store.get(&id).await?))
}

/// Replaces an item's name. The path ID wins over any ID in the body.
///
/// `PUT /items/{id}`
pub async fn update_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let req = ItemPayload::from_body(&body)?;
    let item = state.store.update(&id, req.name).await?;
    tracing::info!(id = %item.id, name = %item.name, "updated item");
    Ok(Json(item))
}

/// `DELETE /items/{id}`
pub async fn delete_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id).await?;
    tracing::info!(%id, "deleted item");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for any method not routed on an item path.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
