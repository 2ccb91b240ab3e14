//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::time::Duration;

/// Default base URL of the platform API
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5985/_api/";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Remote API configuration
    pub api: ApiConfig,
    /// View behavior configuration
    pub view: ViewConfig,
}

/// Remote API configuration
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL, always ending with '/'
    pub base_url: String,
    /// API token sent as `Authorization: Token <value>`
    pub token: Option<String>,
    /// Timeout for each HTTP request (in seconds)
    pub timeout_secs: u64,
}

// Keep the token out of the startup log line
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

/// View behavior configuration
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// How long the run control stays disabled after a run request completes
    pub run_cooldown: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            run_cooldown: Duration::from_millis(2000),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig {
                base_url: normalize_base_url(
                    &env::var("AGENTS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
                ),
                token: env::var("AGENTS_API_TOKEN").ok().filter(|t| !t.is_empty()),
                timeout_secs: env::var("AGENTS_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(30),
            },
            view: ViewConfig {
                run_cooldown: env::var("AGENTS_RUN_COOLDOWN_MS")
                    .ok()
                    .and_then(|ms| ms.parse().ok())
                    .map(Duration::from_millis)
                    .unwrap_or(Duration::from_millis(2000)),
            },
        }
    }
}

/// Ensure the base URL ends with a single trailing slash
pub fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}
