//! Handlers for link endpoints (create, list, resolve, click, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkResponse, LinksResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "custom_alias": "summer-sale"  // optional
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: Link created
/// - **400 Bad Request**: Invalid URL or alias
/// - **409 Conflict**: Custom alias already taken
/// - **500 Internal Server Error**: No unique alias could be generated
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let record = state
        .links
        .create(&payload.url, payload.custom_alias.as_deref())?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(State(state): State<AppState>) -> Json<LinksResponse> {
    Json(state.links.list().into())
}

/// Looks up the link an alias points to without counting a click.
///
/// # Endpoint
///
/// `GET /api/links/resolve/{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if the alias is unknown.
pub async fn resolve_link_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let record = state.links.get(&alias)?;
    Ok(Json(record.into()))
}

/// Counts one click on a link.
///
/// # Endpoint
///
/// `POST /api/links/{id}/clicks`
///
/// Each call is one click; the endpoint is not idempotent.
///
/// # Response Codes
///
/// - **204 No Content**: Click counted
/// - **404 Not Found**: No link with this id
pub async fn record_click_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.links.record_click(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// Always answers 204; deleting an unknown id is a no-op.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    state.links.remove(&id);
    StatusCode::NO_CONTENT
}
