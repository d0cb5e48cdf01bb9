//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, PreferenceService, RedirectService};

#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkService>,
    pub redirects: Arc<RedirectService>,
    pub preferences: Arc<PreferenceService>,
}

impl AppState {
    pub fn new(
        links: Arc<LinkService>,
        redirects: Arc<RedirectService>,
        preferences: Arc<PreferenceService>,
    ) -> Self {
        Self {
            links,
            redirects,
            preferences,
        }
    }
}
