//! Countdown page and visit completion.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use crate::state::AppState;

/// Renders `templates/redirect.html`.
///
/// The page counts down in the browser and then follows `/visit/{ticket}`;
/// the "Continue now" link points at the same URL.
#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
pub struct RedirectTemplate {
    pub alias: String,
    pub original_url: String,
    pub countdown_seconds: u32,
    pub redirect_delay_ms: u128,
    pub ticket: String,
}

/// Renders `templates/not_found.html`.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub alias: String,
}

/// Starts a visit.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response Codes
///
/// - **200 OK**: Countdown page
/// - **404 Not Found**: "Link not found" page with a way back to `/`
pub async fn redirect_page_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Response {
    match state.redirects.begin(&alias) {
        Some(visit) => RedirectTemplate {
            alias: visit.record.alias,
            original_url: visit.record.original_url,
            countdown_seconds: visit.countdown_seconds,
            redirect_delay_ms: visit.redirect_delay.as_millis(),
            ticket: visit.ticket,
        }
        .into_response(),
        None => (StatusCode::NOT_FOUND, NotFoundTemplate { alias }).into_response(),
    }
}

/// Completes a visit and sends the visitor on.
///
/// # Endpoint
///
/// `GET /visit/{ticket}`
///
/// # Response Codes
///
/// - **307 Temporary Redirect**: To the original URL; the first hit counts a click
/// - **404 Not Found**: Unknown or expired ticket
pub async fn visit_handler(
    State(state): State<AppState>,
    Path(ticket): Path<String>,
) -> Response {
    match state.redirects.complete(&ticket) {
        Ok(target) => Redirect::temporary(&target).into_response(),
        Err(e) => {
            debug!(ticket, error = %e, "Visit could not be completed");
            (
                StatusCode::NOT_FOUND,
                NotFoundTemplate {
                    alias: String::new(),
                },
            )
                .into_response()
        }
    }
}
