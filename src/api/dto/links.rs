//! DTOs for the link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLinkRecord;
use crate::utils::timestamp::{iso_millis, iso_millis_option};

/// Request to shorten one URL.
///
/// Only coarse size limits are checked here. URL syntax and alias rules are
/// enforced by the registry so every entry point shares them.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL (absolute HTTP/HTTPS).
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,

    /// Optional custom alias. Blank means "generate one".
    #[validate(length(max = 256))]
    pub custom_alias: Option<String>,
}

/// A short link as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: String,
    pub alias: String,
    pub original_url: String,
    pub short_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
    pub clicks: u64,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub seo_score: u32,
    pub clickbait_score: u32,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "iso_millis_option"
    )]
    pub last_clicked: Option<DateTime<Utc>>,
}

impl From<ShortLinkRecord> for LinkResponse {
    fn from(record: ShortLinkRecord) -> Self {
        Self {
            id: record.id,
            alias: record.alias,
            original_url: record.original_url,
            short_url: record.short_url,
            custom_alias: record.custom_alias,
            clicks: record.clicks,
            created_at: record.created_at,
            seo_score: record.seo_score,
            clickbait_score: record.clickbait_score,
            last_clicked: record.last_clicked,
        }
    }
}

/// All links, newest first.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub total: usize,
    pub items: Vec<LinkResponse>,
}

impl From<Vec<ShortLinkRecord>> for LinksResponse {
    fn from(records: Vec<ShortLinkRecord>) -> Self {
        Self {
            total: records.len(),
            items: records.into_iter().map(LinkResponse::from).collect(),
        }
    }
}
