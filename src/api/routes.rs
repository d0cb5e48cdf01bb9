//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_tab_handler, list_links_handler,
    record_click_handler, resolve_link_handler, set_tab_handler, summary_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /links`                 - List links, newest first
/// - `POST   /links`                 - Shorten a URL
/// - `GET    /links/resolve/{alias}` - Look up an alias without counting
/// - `POST   /links/{id}/clicks`     - Count one click
/// - `DELETE /links/{id}`            - Delete a link
/// - `GET    /summary`               - Dashboard totals
/// - `GET    /preferences/tab`       - Last viewed tab
/// - `PUT    /preferences/tab`       - Store the last viewed tab
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/resolve/{alias}", get(resolve_link_handler))
        .route("/links/{id}/clicks", post(record_click_handler))
        .route("/links/{id}", delete(delete_link_handler))
        .route("/summary", get(summary_handler))
        .route(
            "/preferences/tab",
            get(get_tab_handler).put(set_tab_handler),
        )
}
