//! Browser-facing route configuration.

use crate::state::AppState;
use crate::web::handlers::{redirect_page_handler, shell_handler, visit_handler};
use axum::{Router, routing::get};

/// Pages served to browsers.
///
/// # Endpoints
///
/// - `GET /`               - Application shell
/// - `GET /{alias}`        - Countdown page (or not-found page)
/// - `GET /visit/{ticket}` - Finish a visit with a redirect
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shell_handler))
        .route("/{alias}", get(redirect_page_handler))
        .route("/visit/{ticket}", get(visit_handler))
}
