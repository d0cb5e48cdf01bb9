//! Persisted "last viewed tab" preference.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::Tab;
use crate::domain::store::{DurableStore, TAB_KEY};

/// Reads and writes the tab under [`TAB_KEY`].
///
/// Never fails: anything unreadable falls back to [`Tab::Dashboard`], and
/// write failures are logged.
pub struct PreferenceService {
    store: Arc<dyn DurableStore>,
}

impl PreferenceService {
    pub fn new(store: Arc<dyn DurableStore>) -> Self {
        Self { store }
    }

    pub fn current_tab(&self) -> Tab {
        match self.store.read(TAB_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                debug!(error = %e, "Stored tab is not recognised, using default");
                Tab::default()
            }),
            Ok(None) => Tab::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read tab preference");
                Tab::default()
            }
        }
    }

    pub fn set_tab(&self, tab: Tab) {
        if let Err(e) = self.store.write(TAB_KEY, tab.as_str()) {
            metrics::counter!("store_write_failures_total").increment(1);
            warn!(error = %e, tab = %tab, "Failed to persist tab preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::{MockDurableStore, StoreError};
    use crate::infrastructure::persistence::MemoryStore;

    #[test]
    fn test_defaults_to_dashboard() {
        let prefs = PreferenceService::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.current_tab(), Tab::Dashboard);
    }

    #[test]
    fn test_set_and_read_back() {
        let store = Arc::new(MemoryStore::new());
        let prefs = PreferenceService::new(store.clone());

        prefs.set_tab(Tab::Analytics);

        assert_eq!(prefs.current_tab(), Tab::Analytics);
        assert_eq!(store.read(TAB_KEY).unwrap().as_deref(), Some("analytics"));
    }

    #[test]
    fn test_garbage_value_falls_back() {
        let store = Arc::new(MemoryStore::new());
        store.write(TAB_KEY, "settings").unwrap();

        let prefs = PreferenceService::new(store);
        assert_eq!(prefs.current_tab(), Tab::Dashboard);
    }

    #[test]
    fn test_store_failures_are_swallowed() {
        let mut store = MockDurableStore::new();
        store
            .expect_read()
            .returning(|key| Err(StoreError::read(key, "boom")));
        store
            .expect_write()
            .times(1)
            .returning(|key, _| Err(StoreError::write(key, "boom")));
        let prefs = PreferenceService::new(Arc::new(store));

        prefs.set_tab(Tab::Seo);
        assert_eq!(prefs.current_tab(), Tab::Dashboard);
    }
}
