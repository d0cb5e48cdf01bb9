//! Handler for the dashboard summary.

use axum::{Json, extract::State};

use crate::api::dto::summary::SummaryResponse;
use crate::state::AppState;

/// Returns totals over all links.
///
/// # Endpoint
///
/// `GET /api/summary`
///
/// # Response
///
/// ```json
/// {
///   "total_links": 3,
///   "total_clicks": 12,
///   "average_seo_score": 78,
///   "top_link": { "alias": "summer-sale", "clicks": 9, ... }
/// }
/// ```
pub async fn summary_handler(State(state): State<AppState>) -> Json<SummaryResponse> {
    Json(state.links.summary().into())
}
