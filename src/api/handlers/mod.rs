//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod preferences;
pub mod summary;

pub use health::health_handler;
pub use links::{
    create_link_handler, delete_link_handler, list_links_handler, record_click_handler,
    resolve_link_handler,
};
pub use preferences::{get_tab_handler, set_tab_handler};
pub use summary::summary_handler;
