//! HTTP server initialization and runtime setup.
//!
//! Opens the configured store, restores the registry and runs Axum until
//! Ctrl-C, then flushes the registry one last time.

use crate::application::services::{LinkService, PreferenceService, RedirectService};
use crate::config::{Config, StoreBackend};
use crate::domain::registry::AliasRegistry;
use crate::domain::store::DurableStore;
use crate::infrastructure::persistence::{FileStore, MemoryStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the store selected by the configuration.
///
/// # Errors
///
/// Returns an error if the file store directory cannot be created.
pub fn open_store(config: &Config) -> Result<Arc<dyn DurableStore>> {
    let store: Arc<dyn DurableStore> = match config.store_backend {
        StoreBackend::File => Arc::new(
            FileStore::open(&config.store_dir)
                .with_context(|| format!("Failed to open store at {}", config.store_dir.display()))?,
        ),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, links are lost on exit");
            Arc::new(MemoryStore::new())
        }
    };
    Ok(store)
}

/// Builds the application state over an opened store and loads the registry.
pub fn build_state(config: &Config, store: Arc<dyn DurableStore>) -> AppState {
    let mut registry = AliasRegistry::new(store.clone(), config.base_url.clone())
        .with_max_attempts(config.alias_max_attempts);
    registry.load();

    let links = Arc::new(LinkService::new(registry));
    let redirects = Arc::new(RedirectService::new(
        links.clone(),
        config.redirect_settings(),
    ));
    let preferences = Arc::new(PreferenceService::new(store));

    AppState::new(links, redirects, preferences)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config)?;
    let state = build_state(&config, store);
    let links = state.links.clone();

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    if let Err(e) = links.save() {
        tracing::error!(error = %e, "Final save failed");
    }
    tracing::info!(links = links.len(), "Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
