//! Short link record: one entry per shortened URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

use crate::utils::alias::alias_from_short_url;
use crate::utils::timestamp::{iso_millis, iso_millis_option};

/// A shortened URL with its accounting metadata.
///
/// The serde representation is the persisted shape:
///
/// ```json
/// {"id": "...", "originalUrl": "...", "shortUrl": "...", "customAlias": "...",
///  "clicks": 0, "createdAt": "2024-05-01T12:30:00.000Z",
///  "seoScore": 80, "clickbaitScore": 20, "lastClicked": "..."}
/// ```
///
/// `alias` is not stored. It is restored on load by
/// [`ShortLinkRecord::restore_alias`] from `customAlias`, or from the last
/// path segment of `shortUrl` for records that never had a custom alias.
///
/// The counters and scores tolerate missing or malformed values (they fall
/// back to 0) so a damaged cosmetic field never blocks a redirect.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkRecord {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
    #[serde(skip)]
    pub alias: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub clicks: u64,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub seo_score: u32,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub clickbait_score: u32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso_millis_option"
    )]
    pub last_clicked: Option<DateTime<Utc>>,
}

impl ShortLinkRecord {
    /// Returns true if this record answers to `alias` through its custom alias.
    pub fn matches_custom_alias(&self, alias: &str) -> bool {
        self.custom_alias.as_deref() == Some(alias)
    }

    /// Returns true if the last segment of `short_url` equals `alias`.
    pub fn matches_short_url(&self, alias: &str) -> bool {
        alias_from_short_url(&self.short_url) == alias
    }

    /// Recomputes the in-memory `alias` after deserialization.
    ///
    /// Migration shim: older records only carry the generated alias inside
    /// `shortUrl`.
    pub fn restore_alias(&mut self) {
        self.alias = match &self.custom_alias {
            Some(custom) => custom.clone(),
            None => alias_from_short_url(&self.short_url).to_string(),
        };
    }

    /// Whether the record has been visited at least once.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }
}

/// Cosmetic scores assigned at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkScores {
    pub seo_score: u32,
    pub clickbait_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timestamp::now_millis;
    use serde_json::json;

    fn sample() -> ShortLinkRecord {
        ShortLinkRecord {
            id: "id0000000001".to_string(),
            original_url: "https://example.com/a".to_string(),
            short_url: "http://s.test/promo".to_string(),
            custom_alias: Some("promo".to_string()),
            alias: "promo".to_string(),
            clicks: 3,
            created_at: now_millis(),
            seo_score: 81,
            clickbait_score: 12,
            last_clicked: None,
        }
    }

    #[test]
    fn test_serializes_in_stored_shape() {
        let record = sample();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["originalUrl"], "https://example.com/a");
        assert_eq!(value["shortUrl"], "http://s.test/promo");
        assert_eq!(value["customAlias"], "promo");
        assert_eq!(value["clicks"], 3);
        assert_eq!(value["seoScore"], 81);
        assert_eq!(value["clickbaitScore"], 12);
        assert!(value.get("alias").is_none());
        assert!(value.get("lastClicked").is_none());
        assert!(value["createdAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_round_trip_after_restoring_alias() {
        let mut record = sample();
        record.last_clicked = Some(now_millis());

        let json = serde_json::to_string(&record).unwrap();
        let mut parsed: ShortLinkRecord = serde_json::from_str(&json).unwrap();
        parsed.restore_alias();

        assert_eq!(parsed, record);
    }

    #[test]
    fn test_restore_alias_from_short_url_when_no_custom_alias() {
        let mut record: ShortLinkRecord = serde_json::from_value(json!({
            "id": "x",
            "originalUrl": "https://example.com",
            "shortUrl": "https://lnk.pro/k3j9x2",
            "clicks": 0,
            "createdAt": "2024-05-01T12:30:00.000Z",
            "seoScore": 70,
            "clickbaitScore": 20
        }))
        .unwrap();

        record.restore_alias();

        assert_eq!(record.alias, "k3j9x2");
        assert!(record.custom_alias.is_none());
    }

    #[test]
    fn test_malformed_cosmetic_fields_default_to_zero() {
        let record: ShortLinkRecord = serde_json::from_value(json!({
            "id": "x",
            "originalUrl": "https://example.com",
            "shortUrl": "https://lnk.pro/k3j9x2",
            "clicks": "many",
            "createdAt": "2024-05-01T12:30:00.000Z",
            "seoScore": "n/a",
            "lastClicked": "yesterday"
        }))
        .unwrap();

        assert_eq!(record.clicks, 0);
        assert_eq!(record.seo_score, 0);
        assert_eq!(record.clickbait_score, 0);
        assert!(record.last_clicked.is_none());
    }

    #[test]
    fn test_matching_helpers() {
        let mut record = sample();
        record.short_url = "http://s.test/gen123".to_string();

        assert!(record.matches_custom_alias("promo"));
        assert!(!record.matches_custom_alias("gen123"));
        assert!(record.matches_short_url("gen123"));
        assert!(!record.matches_short_url("promo"));
    }
}
