//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. The session secret and cookie parameters live here rather than as
//! hardcoded literals, so session compatibility across restarts is an
//! explicit deployment concern.
//!
//! ## Required Variables
//!
//! - `SESSION_SECRET` - Signing key material for session cookies (>= 32 bytes)
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://shortly.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:4568`)
//! - `SESSION_COOKIE_NAME` - Session cookie key (default: `sid`)
//! - `SESSION_MAX_AGE_SECS` - Cookie inactivity expiry (default: 600)
//! - `PROTECT_LINKS_ROUTE` - Gate `GET /links` behind the session (default: false)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Key material for signing session cookies. Must be at least 32 bytes;
    /// changing it invalidates every outstanding session.
    pub session_secret: String,
    /// Cookie key under which the session id travels.
    pub session_cookie_name: String,
    /// Inactivity expiry of the session cookie in seconds.
    pub session_max_age_secs: u64,
    /// When true, `GET /links` requires an authenticated session. The
    /// reference deployment left the listing open; the flag makes that
    /// choice explicit instead of accidental.
    pub protect_links_route: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SESSION_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://shortly.db?mode=rwc".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:4568".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let session_secret = env::var("SESSION_SECRET").context("SESSION_SECRET must be set")?;

        let session_cookie_name =
            env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "sid".to_string());

        let session_max_age_secs = env::var("SESSION_MAX_AGE_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        let protect_links_route = env::var("PROTECT_LINKS_ROUTE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            session_secret,
            session_cookie_name,
            session_max_age_secs,
            protect_links_route,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `session_secret` is shorter than 32 bytes
    /// - `session_max_age_secs` is zero
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or `database_url` is malformed
    pub fn validate(&self) -> Result<()> {
        // Key derivation for signed cookies needs at least 32 bytes of
        // material.
        if self.session_secret.len() < 32 {
            anyhow::bail!(
                "SESSION_SECRET must be at least 32 bytes, got {}",
                self.session_secret.len()
            );
        }

        if self.session_max_age_secs == 0 {
            anyhow::bail!("SESSION_MAX_AGE_SECS must be greater than 0");
        }

        if self.session_cookie_name.is_empty() {
            anyhow::bail!("SESSION_COOKIE_NAME must not be empty");
        }

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

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Session cookie: {}", self.session_cookie_name);
        tracing::info!("  Session max age: {}s", self.session_max_age_secs);
        tracing::info!("  /links listing protected: {}", self.protect_links_route);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
