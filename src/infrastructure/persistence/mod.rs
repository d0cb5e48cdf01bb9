//! Durable store implementations.
//!
//! - [`FileStore`] - One file per key, atomic replace on write
//! - [`MemoryStore`] - Process-local map, nothing survives a restart

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
