//! Core domain entities.
//!
//! - [`ShortLinkRecord`] - A shortened URL with click accounting
//! - [`LinkScores`] - Cosmetic scores assigned at creation
//! - [`RegistrySummary`] - Dashboard tallies over all records
//! - [`Tab`] - The persisted "last viewed" UI tab

pub mod record;
pub mod summary;
pub mod tab;

pub use record::{LinkScores, ShortLinkRecord};
pub use summary::RegistrySummary;
pub use tab::{Tab, UnknownTab};
