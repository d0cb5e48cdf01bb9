//! DTOs for the tab preference endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Tab;

/// Body of `PUT /api/preferences/tab`.
///
/// The tab id is parsed by the handler so an unknown id gets a validation
/// error instead of a generic JSON rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct SetTabRequest {
    #[validate(length(min = 1, max = 32))]
    pub tab: String,
}

#[derive(Debug, Serialize)]
pub struct TabResponse {
    pub tab: Tab,
}
