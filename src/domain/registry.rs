//! The alias registry: the single owner of all short link records.
//!
//! Records are kept newest first and mirrored to a [`DurableStore`] under
//! [`LINKS_KEY`] after every mutation. Persistence is best-effort: a failed
//! write is logged and the in-memory collection stays authoritative for the
//! rest of the process lifetime.
//!
//! # Lifecycle
//!
//! 1. [`AliasRegistry::new`] with the store and the public base URL
//! 2. [`AliasRegistry::load`] once at startup
//! 3. `create` / `resolve` / `record_click` / `remove` / `list`
//!
//! # Resolution
//!
//! An alias matches a record's custom alias first. Only if no record has that
//! custom alias is the trailing segment of each `shortUrl` compared. Records
//! written by older versions carry their generated alias only inside
//! `shortUrl`, so the second pass keeps them reachable.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::{RegistrySummary, ShortLinkRecord};
use crate::domain::store::{DurableStore, HEALTH_KEY, LINKS_KEY, StoreError};
use crate::domain::token_source::{RandomTokenSource, TokenSource};
use crate::simulation::{RandomScores, ScoreSource};
use crate::utils::alias::{AliasValidationError, is_reserved, short_url_for, validate_custom_alias};
use crate::utils::timestamp::{now_millis, to_iso_millis};
use crate::utils::url_validator::{UrlValidationError, validate_target_url};

/// Default bound on alias/id generation attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Reasons [`AliasRegistry::create`] can refuse a link.
///
/// None of these leave a trace in the registry.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error(transparent)]
    InvalidUrl(#[from] UrlValidationError),

    #[error(transparent)]
    InvalidAlias(#[from] AliasValidationError),

    #[error("Alias '{0}' is already taken")]
    AliasTaken(String),

    #[error("Could not generate a unique {what} after {attempts} attempts")]
    GenerationExhausted { what: &'static str, attempts: usize },
}

/// In-memory collection of short links backed by a durable store.
pub struct AliasRegistry {
    records: Vec<ShortLinkRecord>,
    store: Arc<dyn DurableStore>,
    tokens: Arc<dyn TokenSource>,
    scores: Arc<dyn ScoreSource>,
    base_url: String,
    max_attempts: usize,
}

impl AliasRegistry {
    /// Creates an empty registry. Call [`Self::load`] to restore saved links.
    pub fn new(store: Arc<dyn DurableStore>, base_url: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            store,
            tokens: Arc::new(RandomTokenSource),
            scores: Arc::new(RandomScores),
            base_url: base_url.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replaces the random alias/id source.
    pub fn with_token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Replaces the simulated score generator.
    pub fn with_score_source(mut self, scores: Arc<dyn ScoreSource>) -> Self {
        self.scores = scores;
        self
    }

    /// Sets the generation retry bound (at least one attempt).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Replaces the in-memory collection with the stored one.
    ///
    /// A missing key yields an empty registry. An unreadable or corrupt value
    /// is logged and also yields an empty registry; it is never fatal.
    ///
    /// Returns the number of records loaded.
    pub fn load(&mut self) -> usize {
        self.records = match self.read_records() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Link store unreadable, starting with an empty registry");
                Vec::new()
            }
        };

        info!(
            count = self.records.len(),
            backend = self.store.backend_name(),
            "Links loaded"
        );
        self.records.len()
    }

    fn read_records(&self) -> Result<Vec<ShortLinkRecord>, StoreError> {
        let Some(raw) = self.store.read(LINKS_KEY)? else {
            return Ok(Vec::new());
        };

        let mut records: Vec<ShortLinkRecord> =
            serde_json::from_str(&raw).map_err(|e| StoreError::read(LINKS_KEY, e))?;
        for record in &mut records {
            record.restore_alias();
        }
        Ok(records)
    }

    /// Writes the full collection to the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if serialization or the backend fails.
    pub fn save(&self) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(&self.records).map_err(|e| StoreError::write(LINKS_KEY, e))?;
        self.store.write(LINKS_KEY, &json)
    }

    /// Round-trips a timestamp through [`HEALTH_KEY`].
    ///
    /// The links key is left alone, so polling this does not clobber what
    /// another process wrote there.
    ///
    /// # Errors
    ///
    /// Returns the store error, or [`StoreError::Read`] if the value read back
    /// differs from the one written.
    pub fn check_store(&self) -> Result<(), StoreError> {
        let stamp = to_iso_millis(&now_millis());
        self.store.write(HEALTH_KEY, &stamp)?;

        match self.store.read(HEALTH_KEY)? {
            Some(value) if value == stamp => Ok(()),
            _ => Err(StoreError::read(HEALTH_KEY, "value read back differs")),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            metrics::counter!("store_write_failures_total").increment(1);
            warn!(error = %e, "Failed to persist links, keeping in-memory state");
        }
    }

    /// Shortens `original_url`, optionally under a user-chosen alias.
    ///
    /// The custom alias is trimmed; an empty one counts as absent. Without a
    /// custom alias a random 6-character alias is drawn until it is free.
    ///
    /// # Errors
    ///
    /// - [`CreateError::InvalidUrl`] if the URL is not absolute HTTP(S)
    /// - [`CreateError::InvalidAlias`] if the custom alias breaks the alias rules
    /// - [`CreateError::AliasTaken`] if the custom alias already resolves
    /// - [`CreateError::GenerationExhausted`] if no free token was drawn in time
    pub fn create(
        &mut self,
        original_url: &str,
        custom_alias: Option<&str>,
    ) -> Result<ShortLinkRecord, CreateError> {
        let original_url = validate_target_url(original_url)?;
        let custom_alias = custom_alias.map(str::trim).filter(|a| !a.is_empty());

        let alias = match custom_alias {
            Some(custom) => {
                validate_custom_alias(custom)?;
                if self.is_alias_taken(custom) {
                    return Err(CreateError::AliasTaken(custom.to_string()));
                }
                custom.to_string()
            }
            None => self.generate_unique_alias()?,
        };
        let id = self.generate_unique_id()?;
        let scores = self.scores.scores(&original_url);

        let record = ShortLinkRecord {
            id,
            short_url: short_url_for(&self.base_url, &alias),
            custom_alias: custom_alias.map(str::to_string),
            alias,
            original_url,
            clicks: 0,
            created_at: now_millis(),
            seo_score: scores.seo_score,
            clickbait_score: scores.clickbait_score,
            last_clicked: None,
        };

        self.records.insert(0, record.clone());
        self.persist();

        metrics::counter!("links_created_total").increment(1);
        info!(
            id = %record.id,
            alias = %record.alias,
            custom = record.custom_alias.is_some(),
            "Short link created"
        );

        Ok(record)
    }

    /// Looks up the record an alias points at. Read-only.
    pub fn resolve(&self, alias: &str) -> Option<ShortLinkRecord> {
        self.find(alias).cloned()
    }

    fn find(&self, alias: &str) -> Option<&ShortLinkRecord> {
        self.records
            .iter()
            .find(|r| r.matches_custom_alias(alias))
            .or_else(|| self.records.iter().find(|r| r.matches_short_url(alias)))
    }

    fn is_alias_taken(&self, alias: &str) -> bool {
        is_reserved(alias) || self.find(alias).is_some()
    }

    fn generate_unique_alias(&self) -> Result<String, CreateError> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.tokens.next_alias();
            if !candidate.is_empty() && !self.is_alias_taken(&candidate) {
                return Ok(candidate);
            }
            debug!(attempt, candidate, "Generated alias collides, retrying");
        }

        Err(CreateError::GenerationExhausted {
            what: "alias",
            attempts: self.max_attempts,
        })
    }

    fn generate_unique_id(&self) -> Result<String, CreateError> {
        for _ in 0..self.max_attempts {
            let candidate = self.tokens.next_id();
            if !candidate.is_empty() && !self.records.iter().any(|r| r.id == candidate) {
                return Ok(candidate);
            }
        }

        Err(CreateError::GenerationExhausted {
            what: "id",
            attempts: self.max_attempts,
        })
    }

    /// Counts one visit of the record with `id` and persists.
    ///
    /// Not idempotent: each call is one click. `lastClicked` never moves
    /// backwards even if the wall clock does.
    ///
    /// Returns `false` (and changes nothing) if no record has this id.
    pub fn record_click(&mut self, id: &str) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            debug!(id, "Click for unknown record ignored");
            return false;
        };

        let now = now_millis();
        record.clicks = record.clicks.saturating_add(1);
        record.last_clicked = Some(match record.last_clicked {
            Some(previous) if previous > now => previous,
            _ => now,
        });
        let clicks = record.clicks;

        self.persist();

        metrics::counter!("link_clicks_total").increment(1);
        debug!(id, clicks, "Click recorded");
        true
    }

    /// Deletes the record with `id`.
    ///
    /// Returns `false` if there was nothing to delete; that is not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;

        self.persist();

        if removed {
            info!(id, "Short link removed");
        } else {
            debug!(id, "Remove for unknown record ignored");
        }
        removed
    }

    /// All records, newest first.
    pub fn list(&self) -> &[ShortLinkRecord] {
        &self.records
    }

    /// Dashboard totals over the current records.
    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary::from_records(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Public origin used to build short URLs.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Name of the backing store.
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }
}
