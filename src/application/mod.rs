//! Application layer services.
//!
//! Services wrap the domain types for concurrent use by HTTP handlers and the
//! admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Locked access to the alias registry
//! - [`services::redirect_service::RedirectService`] - Countdown drivers and visit tickets
//! - [`services::preference_service::PreferenceService`] - Last viewed tab
pub mod services;
