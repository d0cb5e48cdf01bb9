//! Durable key-value store abstraction.
//!
//! The registry and the tab preference each own one key; health checks
//! scribble on a third. Values are opaque
//! strings; the registry stores a JSON array, the preference a bare tab id.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::FileStore`] - one file per key
//! - [`crate::infrastructure::persistence::MemoryStore`] - in-process map
//! - Test mocks available with `cfg(test)`

use thiserror::Error;

/// Key holding the serialized link collection.
pub const LINKS_KEY: &str = "linkpro-urls";

/// Key holding the last viewed tab.
pub const TAB_KEY: &str = "linkpro-tab";

/// Scratch key written by health checks.
pub const HEALTH_KEY: &str = "linkpro-health";

/// Errors raised by a durable store.
///
/// Callers in this crate log these and carry on with in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The value could not be read or decoded.
    #[error("Failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    /// The value could not be written.
    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

impl StoreError {
    pub fn read(key: &str, reason: impl ToString) -> Self {
        Self::Read {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(key: &str, reason: impl ToString) -> Self {
        Self::Write {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Synchronous string key-value storage.
///
/// Every write replaces the whole value under the key.
#[cfg_attr(test, mockall::automock)]
pub trait DurableStore: Send + Sync {
    /// Reads the value under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it was never written
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the backend fails.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the backend fails.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
