//! Aggregate tallies shown on the dashboard and analytics views.

use serde::Serialize;

use super::record::ShortLinkRecord;

/// Totals computed over the whole registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrySummary {
    pub total_links: usize,
    pub total_clicks: u64,
    /// Mean SEO score rounded to the nearest integer, 0 when empty.
    pub average_seo_score: u32,
    /// The most clicked record. Ties go to the later record in list order.
    pub top_link: Option<ShortLinkRecord>,
}

impl RegistrySummary {
    /// Computes the summary for an ordered (newest first) slice of records.
    pub fn from_records(records: &[ShortLinkRecord]) -> Self {
        let total_links = records.len();
        let total_clicks = records.iter().map(|r| r.clicks).sum();

        let average_seo_score = if total_links == 0 {
            0
        } else {
            let sum: u64 = records.iter().map(|r| u64::from(r.seo_score)).sum();
            (sum as f64 / total_links as f64).round() as u32
        };

        let top_link = records
            .iter()
            .reduce(|best, current| {
                if best.clicks > current.clicks {
                    best
                } else {
                    current
                }
            })
            .cloned();

        Self {
            total_links,
            total_clicks,
            average_seo_score,
            top_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timestamp::now_millis;

    fn record(id: &str, clicks: u64, seo: u32) -> ShortLinkRecord {
        ShortLinkRecord {
            id: id.to_string(),
            original_url: "https://example.com".to_string(),
            short_url: format!("http://s.test/{id}"),
            custom_alias: None,
            alias: id.to_string(),
            clicks,
            created_at: now_millis(),
            seo_score: seo,
            clickbait_score: 10,
            last_clicked: None,
        }
    }

    #[test]
    fn test_empty_registry() {
        let summary = RegistrySummary::from_records(&[]);
        assert_eq!(summary.total_links, 0);
        assert_eq!(summary.total_clicks, 0);
        assert_eq!(summary.average_seo_score, 0);
        assert!(summary.top_link.is_none());
    }

    #[test]
    fn test_totals_and_rounded_average() {
        let records = vec![record("a", 2, 70), record("b", 5, 81), record("c", 0, 60)];
        let summary = RegistrySummary::from_records(&records);

        assert_eq!(summary.total_links, 3);
        assert_eq!(summary.total_clicks, 7);
        assert_eq!(summary.average_seo_score, 70);
        assert_eq!(summary.top_link.unwrap().id, "b");
    }

    #[test]
    fn test_top_link_tie_prefers_later_record() {
        let records = vec![record("newer", 4, 70), record("older", 4, 70)];
        let summary = RegistrySummary::from_records(&records);
        assert_eq!(summary.top_link.unwrap().id, "older");
    }
}
