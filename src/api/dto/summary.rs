//! DTO for the dashboard summary endpoint.

use serde::Serialize;

use super::links::LinkResponse;
use crate::domain::entities::RegistrySummary;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_links: usize,
    pub total_clicks: u64,
    pub average_seo_score: u32,
    pub top_link: Option<LinkResponse>,
}

impl From<RegistrySummary> for SummaryResponse {
    fn from(summary: RegistrySummary) -> Self {
        Self {
            total_links: summary.total_links,
            total_clicks: summary.total_clicks,
            average_seo_score: summary.average_seo_score,
            top_link: summary.top_link.map(LinkResponse::from),
        }
    }
}
