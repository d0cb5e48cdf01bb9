//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Example
//!
//! ```bash
//! export BASE_URL="https://lnk.pro"
//! export STORE_BACKEND="file"
//! export STORE_DIR="/var/lib/linkpro"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public origin prepended to aliases (default: `http://localhost:3000`)
//! - `STORE_BACKEND` - `file` or `memory` (default: `file`)
//! - `STORE_DIR` - Directory for the file store (default: `./data`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)
//! - `REDIRECT_COUNTDOWN_SECONDS` - Countdown before redirecting (default: 5, max: 60)
//! - `REDIRECT_DELAY_MS` - Pause after the countdown (default: 500, max: 10000)
//! - `ALIAS_MAX_ATTEMPTS` - Alias generation retry bound (default: 100, min: 1)
//! - `VISIT_TICKET_TTL_SECONDS` - Lifetime of an unfinished visit (default: 600)

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::RedirectSettings;

/// Where the registry and preferences are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("STORE_BACKEND must be 'file' or 'memory', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub store_backend: StoreBackend,
    pub store_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub redirect_countdown_seconds: u32,
    pub redirect_delay_ms: u64,
    pub alias_max_attempts: usize,
    pub visit_ticket_ttl_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORE_BACKEND` names an unknown backend.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url = env::var("BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let store_backend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .parse()?;
        let store_dir = env::var("STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let redirect_countdown_seconds = env::var("REDIRECT_COUNTDOWN_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let redirect_delay_ms = env::var("REDIRECT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        let alias_max_attempts = env::var("ALIAS_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let visit_ticket_ttl_seconds = env::var("VISIT_TICKET_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        Ok(Self {
            listen_addr,
            base_url,
            store_backend,
            store_dir,
            log_level,
            log_format,
            behind_proxy,
            redirect_countdown_seconds,
            redirect_delay_ms,
            alias_max_attempts,
            visit_ticket_ttl_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - a timing or retry setting is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match url::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {}
            _ => anyhow::bail!(
                "BASE_URL must be an absolute http(s) URL, got '{}'",
                self.base_url
            ),
        }

        if self.redirect_countdown_seconds > 60 {
            anyhow::bail!(
                "REDIRECT_COUNTDOWN_SECONDS is too large (max: 60), got {}",
                self.redirect_countdown_seconds
            );
        }

        if self.redirect_delay_ms > 10_000 {
            anyhow::bail!(
                "REDIRECT_DELAY_MS is too large (max: 10000), got {}",
                self.redirect_delay_ms
            );
        }

        if self.alias_max_attempts == 0 {
            anyhow::bail!("ALIAS_MAX_ATTEMPTS must be at least 1");
        }

        if self.visit_ticket_ttl_seconds == 0 {
            anyhow::bail!("VISIT_TICKET_TTL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    pub fn redirect_settings(&self) -> RedirectSettings {
        RedirectSettings {
            countdown_seconds: self.redirect_countdown_seconds,
            redirect_delay: Duration::from_millis(self.redirect_delay_ms),
            ticket_ttl: Duration::from_secs(self.visit_ticket_ttl_seconds),
            ..RedirectSettings::default()
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        match self.store_backend {
            StoreBackend::File => tracing::info!("  Store: file ({})", self.store_dir.display()),
            StoreBackend::Memory => tracing::info!("  Store: memory (nothing is kept on exit)"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Redirect: {}s countdown, {}ms delay",
            self.redirect_countdown_seconds,
            self.redirect_delay_ms
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            store_backend: StoreBackend::File,
            store_dir: PathBuf::from("./data"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            redirect_countdown_seconds: 5,
            redirect_delay_ms: 500,
            alias_max_attempts: 100,
            visit_ticket_ttl_seconds: 600,
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
