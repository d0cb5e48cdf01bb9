//! Business logic services for the application layer.

pub mod link_service;
pub mod preference_service;
pub mod redirect_service;

pub use link_service::LinkService;
pub use preference_service::PreferenceService;
pub use redirect_service::{RedirectService, RedirectSettings, Visit};
