//! Handlers for the last viewed tab preference.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::preferences::{SetTabRequest, TabResponse};
use crate::domain::entities::{Tab, UnknownTab};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/preferences/tab`
pub async fn get_tab_handler(State(state): State<AppState>) -> Json<TabResponse> {
    Json(TabResponse {
        tab: state.preferences.current_tab(),
    })
}

/// Stores the last viewed tab.
///
/// # Endpoint
///
/// `PUT /api/preferences/tab`
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown tab id.
pub async fn set_tab_handler(
    State(state): State<AppState>,
    Json(payload): Json<SetTabRequest>,
) -> Result<Json<TabResponse>, AppError> {
    payload.validate()?;

    let tab: Tab = payload.tab.parse().map_err(|e: UnknownTab| {
        AppError::bad_request(
            "Unknown tab",
            json!({ "tab": e.0, "allowed": Tab::ALL.map(Tab::as_str) }),
        )
    })?;
    state.preferences.set_tab(tab);

    Ok(Json(TabResponse { tab }))
}
