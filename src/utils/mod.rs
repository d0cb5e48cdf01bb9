//! Utility functions for alias generation, URL validation and timestamps.
//!
//! - [`alias`] - Alias/id generation and custom alias validation
//! - [`url_validator`] - Destination URL checks
//! - [`timestamp`] - Millisecond ISO-8601 timestamps used by the store format

pub mod alias;
pub mod timestamp;
pub mod url_validator;
