//! Application shell with tab navigation.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::domain::entities::{ShortLinkRecord, Tab};
use crate::state::AppState;
use crate::utils::timestamp::to_iso_millis;

#[derive(Debug, Deserialize)]
pub struct ShellQuery {
    pub tab: Option<String>,
}

pub struct TabLink {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// One row of the link tables.
pub struct LinkRow {
    pub id: String,
    pub alias: String,
    pub short_url: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: String,
    pub last_clicked: String,
    pub seo_score: u32,
    pub clickbait_score: u32,
}

impl From<ShortLinkRecord> for LinkRow {
    fn from(record: ShortLinkRecord) -> Self {
        Self {
            last_clicked: record
                .last_clicked
                .as_ref()
                .map(to_iso_millis)
                .unwrap_or_else(|| "never".to_string()),
            created_at: to_iso_millis(&record.created_at),
            id: record.id,
            alias: record.alias,
            short_url: record.short_url,
            original_url: record.original_url,
            clicks: record.clicks,
            seo_score: record.seo_score,
            clickbait_score: record.clickbait_score,
        }
    }
}

/// Renders `templates/shell.html`.
///
/// Only the active tab's section is rendered. The shorten form and the delete
/// buttons talk to `/api/links` from the page's script.
#[derive(Template, WebTemplate)]
#[template(path = "shell.html")]
pub struct ShellTemplate {
    pub tabs: Vec<TabLink>,
    pub active: &'static str,
    pub links: Vec<LinkRow>,
    pub total_links: usize,
    pub total_clicks: u64,
    pub average_seo_score: u32,
    pub top_link: Option<LinkRow>,
}

/// Renders the application shell.
///
/// # Endpoint
///
/// `GET /?tab={dashboard|shorten|analytics|seo}`
///
/// A valid `tab` switches the view and is remembered; an unknown one is
/// ignored and the remembered tab is shown.
pub async fn shell_handler(
    State(state): State<AppState>,
    Query(query): Query<ShellQuery>,
) -> impl IntoResponse {
    if let Some(tab) = query.tab.as_deref().and_then(|t| t.parse::<Tab>().ok()) {
        state.preferences.set_tab(tab);
    }
    let active = state.preferences.current_tab();

    let summary = state.links.summary();

    ShellTemplate {
        tabs: Tab::ALL
            .into_iter()
            .map(|tab| TabLink {
                id: tab.as_str(),
                label: tab.label(),
                active: tab == active,
            })
            .collect(),
        active: active.as_str(),
        links: state.links.list().into_iter().map(LinkRow::from).collect(),
        total_links: summary.total_links,
        total_clicks: summary.total_clicks,
        average_seo_score: summary.average_seo_score,
        top_link: summary.top_link.map(LinkRow::from),
    }
}
