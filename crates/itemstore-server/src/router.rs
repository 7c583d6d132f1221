//! Router assembly for the itemstore HTTP API.
//!
//! [`build_router`] wires the item handlers to their routes with a tracing
//! layer.

use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::items;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// `/items/` and `/items/{*id}` share one method router: axum's catch-all
/// never matches an empty segment, and an empty ID must still reach the
/// handlers (where it resolves as not found). Unrouted methods on either
/// path shape get a plain-text 405 instead of axum's empty one. HEAD is
/// routed explicitly, since `get` would otherwise answer it.
pub fn build_router(state: AppState) -> Router {
    let collection: MethodRouter<AppState> = get(items::list_items)
        .post(items::create_item)
        .head(items::method_not_allowed)
        .fallback(items::method_not_allowed);

    let member: MethodRouter<AppState> = get(items::get_item)
        .put(items::update_item)
        .delete(items::delete_item)
        .head(items::method_not_allowed)
        .fallback(items::method_not_allowed);

    Router::new()
        .route("/items", collection)
        .route("/items/", member.clone())
        .route("/items/{*id}", member)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
