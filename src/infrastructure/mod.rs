//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the storage contract defined in
//! [`crate::domain::store`].
//!
//! # Modules
//!
//! - [`persistence`] - File and in-memory durable stores

pub mod persistence;
