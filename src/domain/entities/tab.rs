//! UI tab identifiers persisted as the "last viewed" preference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four views of the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Shorten,
    Analytics,
    Seo,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Shorten, Tab::Analytics, Tab::Seo];

    /// Identifier used in storage and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Shorten => "shorten",
            Tab::Analytics => "analytics",
            Tab::Seo => "seo",
        }
    }

    /// Human-readable label for navigation.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Shorten => "Shorten",
            Tab::Analytics => "Analytics",
            Tab::Seo => "SEO",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known tab id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tab '{0}' (expected dashboard, shorten, analytics or seo)")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s.trim())
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}
