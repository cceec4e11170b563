//! # Provisioner Configuration
//!
//! Settings loaded from environment variables, with defaults matching the
//! Ranger admin container used by the integration tests.

use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_RANGER_ADMIN_PASSWORD, DEFAULT_RANGER_ADMIN_URL, DEFAULT_RANGER_ADMIN_USERNAME,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::provisioner::CheckFailurePolicy;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}' (expected text or json)")),
        }
    }
}

/// Provisioner configuration
///
/// All settings have defaults and can be overridden via environment
/// variables; command-line flags take precedence over both.
#[derive(Clone)]
pub struct ProvisionerConfig {
    /// Base URL of the Ranger admin service
    pub admin_url: String,
    /// Admin username (HTTP Basic auth)
    pub username: String,
    /// Admin password (HTTP Basic auth)
    pub password: String,
    /// Per-request timeout in seconds, 0 keeps the HTTP client default
    pub request_timeout_secs: u64,
    /// What a malformed existence-check response means
    pub check_failure_policy: CheckFailurePolicy,
    /// Log format (json, text)
    pub log_format: LogFormat,
}

impl std::fmt::Debug for ProvisionerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisionerConfig")
            .field("admin_url", &self.admin_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("check_failure_policy", &self.check_failure_policy)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            admin_url: DEFAULT_RANGER_ADMIN_URL.to_string(),
            username: DEFAULT_RANGER_ADMIN_USERNAME.to_string(),
            password: DEFAULT_RANGER_ADMIN_PASSWORD.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            check_failure_policy: CheckFailurePolicy::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl ProvisionerConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Unparsable values fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            admin_url: lookup("RANGER_ADMIN_URL").unwrap_or(defaults.admin_url),
            username: lookup("RANGER_ADMIN_USERNAME").unwrap_or(defaults.username),
            password: lookup("RANGER_ADMIN_PASSWORD").unwrap_or(defaults.password),
            request_timeout_secs: parsed_or(
                lookup("RANGER_REQUEST_TIMEOUT_SECS"),
                defaults.request_timeout_secs,
            ),
            check_failure_policy: parsed_or(
                lookup("RANGER_CHECK_FAILURE_POLICY"),
                defaults.check_failure_policy,
            ),
            log_format: parsed_or(lookup("LOG_FORMAT"), defaults.log_format),
        }
    }

    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

fn parsed_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
