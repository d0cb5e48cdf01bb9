//! Shared, thread-safe access to the alias registry.

use parking_lot::Mutex;
use serde_json::json;

use crate::domain::entities::{RegistrySummary, ShortLinkRecord};
use crate::domain::registry::AliasRegistry;
use crate::error::AppError;

/// Serializes all registry operations behind one lock.
///
/// Each call holds the lock for exactly one registry operation, so concurrent
/// requests observe the single-writer behavior the registry assumes.
pub struct LinkService {
    registry: Mutex<AliasRegistry>,
}

impl LinkService {
    /// Wraps an already loaded registry.
    pub fn new(registry: AliasRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    /// Creates a short link.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a bad URL or alias
    /// - [`AppError::Conflict`] if the custom alias is taken
    /// - [`AppError::Internal`] if no unique alias could be drawn
    pub fn create(
        &self,
        original_url: &str,
        custom_alias: Option<&str>,
    ) -> Result<ShortLinkRecord, AppError> {
        Ok(self.registry.lock().create(original_url, custom_alias)?)
    }

    pub fn resolve(&self, alias: &str) -> Option<ShortLinkRecord> {
        self.registry.lock().resolve(alias)
    }

    /// Resolves or fails with [`AppError::NotFound`].
    pub fn get(&self, alias: &str) -> Result<ShortLinkRecord, AppError> {
        self.resolve(alias).ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "alias": alias }))
        })
    }

    /// Counts one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has `id`.
    pub fn record_click(&self, id: &str) -> Result<(), AppError> {
        if self.registry.lock().record_click(id) {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "id": id }),
            ))
        }
    }

    pub fn remove(&self, id: &str) -> bool {
        self.registry.lock().remove(id)
    }

    /// Snapshot of all records, newest first.
    pub fn list(&self) -> Vec<ShortLinkRecord> {
        self.registry.lock().list().to_vec()
    }

    pub fn summary(&self) -> RegistrySummary {
        self.registry.lock().summary()
    }

    pub fn len(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.lock().is_empty()
    }

    pub fn backend_name(&self) -> &'static str {
        self.registry.lock().backend_name()
    }

    /// Verifies the store accepts writes without touching the links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails the round trip.
    pub fn check_store(&self) -> Result<(), AppError> {
        self.registry.lock().check_store().map_err(|e| {
            AppError::internal("Store check failed", json!({ "reason": e.to_string() }))
        })
    }

    /// Flushes the registry to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the write fails.
    pub fn save(&self) -> Result<(), AppError> {
        self.registry.lock().save().map_err(|e| {
            AppError::internal("Failed to save links", json!({ "reason": e.to_string() }))
        })
    }
}
