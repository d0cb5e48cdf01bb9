//! Template rendering handlers.

pub mod redirect;
pub mod shell;

pub use redirect::{redirect_page_handler, visit_handler};
pub use shell::shell_handler;
