#![allow(dead_code)]

use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Duration;

use linkpro::api;
use linkpro::api::handlers::health_handler;
use linkpro::application::services::{
    LinkService, PreferenceService, RedirectService, RedirectSettings,
};
use linkpro::domain::registry::AliasRegistry;
use linkpro::domain::store::DurableStore;
use linkpro::infrastructure::persistence::MemoryStore;
use linkpro::routes::app_router;
use linkpro::simulation::FixedScores;
use linkpro::state::AppState;
use linkpro::web;

pub const BASE_URL: &str = "http://s.test";

pub fn redirect_settings() -> RedirectSettings {
    RedirectSettings {
        countdown_seconds: 5,
        redirect_delay: Duration::from_millis(500),
        ticket_ttl: Duration::from_secs(600),
        ..RedirectSettings::default()
    }
}

/// State over an existing store, with the registry loaded from it.
pub fn create_state_with_store(store: Arc<dyn DurableStore>) -> AppState {
    let mut registry = AliasRegistry::new(store.clone(), BASE_URL)
        .with_score_source(Arc::new(FixedScores::new(80, 20)));
    registry.load();

    let links = Arc::new(LinkService::new(registry));
    let redirects = Arc::new(RedirectService::new(links.clone(), redirect_settings()));
    let preferences = Arc::new(PreferenceService::new(store));

    AppState::new(links, redirects, preferences)
}

pub fn create_test_state() -> AppState {
    create_state_with_store(Arc::new(MemoryStore::new()))
}

/// Full route table without the rate limiter, which needs a peer address.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .with_state(state)
}

/// The production router behind a fixed peer address, limiter included.
pub fn create_full_app(state: AppState) -> Router {
    Router::new()
        .fallback_service(app_router(state, false))
        .layer(MockConnectInfoLayer)
}

pub fn insert_link(state: &AppState, url: &str, alias: Option<&str>) -> String {
    state.links.create(url, alias).unwrap().id
}

/// Inserts a fixed peer address so `PeerIpKeyExtractor` works in tests.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: std::net::SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(axum::extract::ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Pulls the visit ticket out of a rendered countdown page.
pub fn ticket_from_page(html: &str) -> String {
    let start = html.find("/visit/").expect("page links to a visit") + "/visit/".len();
    html[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect()
}
