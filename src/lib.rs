//! # LinkPro
//!
//! A small URL shortener: aliases map to target URLs, visits go through a
//! short countdown page, and every completed visit is counted.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Alias registry, redirect flow and storage contract
//! - **Application Layer** ([`application`]) - Thread-safe services over the domain
//! - **Infrastructure Layer** ([`infrastructure`]) - File and in-memory stores
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered shell, countdown and not-found pages
//!
//! ## Features
//!
//! - Random 6-character aliases or user-chosen custom aliases
//! - Collision-free alias generation with a bounded retry
//! - Countdown redirects that count exactly one click per visit
//! - Durable JSON storage compatible with the browser-era `linkpro-urls` format
//! - Simulated SEO and clickbait scores
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"
//! export STORE_DIR="./data"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod simulation;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        LinkService, PreferenceService, RedirectService, RedirectSettings,
    };
    pub use crate::domain::entities::{RegistrySummary, ShortLinkRecord, Tab};
    pub use crate::domain::registry::{AliasRegistry, CreateError};
    pub use crate::domain::store::DurableStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{FileStore, MemoryStore};
    pub use crate::state::AppState;
}
