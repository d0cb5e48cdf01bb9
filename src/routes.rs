//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Application shell
//! - `GET  /{alias}`        - Countdown page for a short link
//! - `GET  /visit/{ticket}` - Completes a visit with a redirect
//! - `GET  /health`         - Store and registry health
//! - `/api/*`               - REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API and the pages,
//!   each with its own budget
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   forwarding headers instead of the peer socket address; enable only when
///   the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let (api_router, web_router) = if behind_proxy {
        (
            api::routes::routes().layer(rate_limit::proxied_layer()),
            web::routes::routes().layer(rate_limit::proxied_layer()),
        )
    } else {
        (
            api::routes::routes().layer(rate_limit::layer()),
            web::routes::routes().layer(rate_limit::layer()),
        )
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
