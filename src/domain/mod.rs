//! Domain layer: the alias registry and everything it depends on.
//!
//! Nothing here knows about HTTP, files or timers. Infrastructure plugs in
//! through the traits defined in this module.
//!
//! # Architecture
//!
//! - [`entities`] - Records, summary tallies and the tab preference
//! - [`registry`] - [`registry::AliasRegistry`], the owner of all records
//! - [`redirect_flow`] - Countdown state machine for a single visit
//! - [`store`] - [`store::DurableStore`] contract and storage keys
//! - [`token_source`] - Pluggable alias/id generation
//!
//! # Visit Flow
//!
//! 1. The visitor's alias is passed to [`registry::AliasRegistry::resolve`]
//! 2. The result seeds a [`redirect_flow::RedirectFlow`]
//! 3. The flow counts down and hands out one [`redirect_flow::ClickIntent`]
//! 4. The driver calls [`registry::AliasRegistry::record_click`] and navigates

pub mod entities;
pub mod redirect_flow;
pub mod registry;
pub mod store;
pub mod token_source;
