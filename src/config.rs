//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Environment variables can come from the process environment or a
//! local `.env` file (loaded in `main.rs` via `dotenvy`).
//!
//! ## Required Variables
//!
//! - `CONGRESS_API_KEY` - credential for the Congress.gov API; attached to
//!   every bills-API request as a query parameter and never exposed to
//!   callers
//!
//! ## Optional Variables
//!
//! - `CONGRESS_API_HOST` - bills API base URL (default:
//!   `https://api.congress.gov/v3`)
//! - `FEDERAL_REGISTER_API_HOST` - Federal Register base URL (default:
//!   `https://www.federalregister.gov/api/v1`)
//! - `LISTEN` - bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)
//! - `CACHE_ENABLED` - disable the response cache when `false` (default:
//!   `true`)
//! - `CACHE_TTL_SECONDS` - response cache TTL (default: 3600)
//! - `ASSETS_DIR` - directory containing `widgets.json` / `apps.json`
//!   (default: `config`)
//! - `CORS_ALLOWED_ORIGINS` - comma-separated origin list (default: local
//!   dashboard dev ports)

use anyhow::{Context, Result};
use std::env;

/// Default base URL for the Congress.gov v3 API.
const DEFAULT_CONGRESS_API_HOST: &str = "https://api.congress.gov/v3";

/// Default base URL for the Federal Register documents API.
const DEFAULT_FEDERAL_REGISTER_API_HOST: &str = "https://www.federalregister.gov/api/v1";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential appended to every Congress.gov request.
    pub congress_api_key: String,
    pub congress_api_host: String,
    pub federal_register_api_host: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When false, the service runs with a no-op cache and every request
    /// reaches upstream.
    pub cache_enabled: bool,
    /// TTL (seconds) applied to every cached response.
    pub cache_ttl_seconds: u64,
    /// Directory the static `widgets.json` / `apps.json` files are read from.
    pub assets_dir: String,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CONGRESS_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let congress_api_key =
            env::var("CONGRESS_API_KEY").context("CONGRESS_API_KEY must be set")?;

        let congress_api_host = env::var("CONGRESS_API_HOST")
            .unwrap_or_else(|_| DEFAULT_CONGRESS_API_HOST.to_string());
        let federal_register_api_host = env::var("FEDERAL_REGISTER_API_HOST")
            .unwrap_or_else(|_| DEFAULT_FEDERAL_REGISTER_API_HOST.to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let assets_dir = env::var("ASSETS_DIR").unwrap_or_else(|_| "config".to_string());

        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| default_origins());

        Ok(Self {
            congress_api_key,
            congress_api_host,
            federal_register_api_host,
            listen_addr,
            log_level,
            log_format,
            cache_enabled,
            cache_ttl_seconds,
            assets_dir,
            allowed_origins,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `congress_api_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - an upstream host is not an HTTP(S) URL
    /// - `cache_ttl_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.congress_api_key.is_empty() {
            anyhow::bail!("CONGRESS_API_KEY must not be empty");
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

        for (name, host) in [
            ("CONGRESS_API_HOST", &self.congress_api_host),
            ("FEDERAL_REGISTER_API_HOST", &self.federal_register_api_host),
        ] {
            if !host.starts_with("http://") && !host.starts_with("https://") {
                anyhow::bail!("{} must start with 'http://' or 'https://', got '{}'", name, host);
            }
        }

        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without the credential).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Congress API: {}", self.congress_api_host);
        tracing::info!("  API key: {}", mask_api_key(&self.congress_api_key));
        tracing::info!("  Federal Register API: {}", self.federal_register_api_host);

        if self.cache_enabled {
            tracing::info!("  Cache: enabled (TTL {}s)", self.cache_ttl_seconds);
        } else {
            tracing::info!("  Cache: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Origins the dashboard frontend is served from during development.
fn default_origins() -> Vec<String> {
    [
        "http://localhost",
        "http://localhost:1420",
        "http://localhost:3000",
        "http://localhost:5050",
    ]
    .map(str::to_string)
    .to_vec()
}

/// Masks the API key for logging, keeping only a short prefix.
fn mask_api_key(key: &str) -> String {
    if key.chars().count() <= 4 {
        "***".to_string()
    } else {
        let prefix: String = key.chars().take(4).collect();
        format!("{}***", prefix)
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
