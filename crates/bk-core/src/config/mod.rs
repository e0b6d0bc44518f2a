//! # Configuration DTO
//!
//! Maps the TOML config file onto [`AppConfig`]. This module holds data only:
//! no validation and no I/O. Missing keys fall back to the documented
//! defaults; malformed values are treated as missing.
//!
//! Environment and command-line overrides are applied by the shell on top of
//! the value produced here.

use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Application configuration (pure data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash normalization.
    pub api_base_url: String,

    pub request_timeout_ms: u64,

    /// Render protected routes regardless of session state.
    pub guard_bypass: bool,

    /// Overrides the platform data directory when set.
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create AppConfig from a parsed TOML document.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            api_base_url: toml_value
                .get("api")
                .and_then(|a| a.get("base_url"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            request_timeout_ms: toml_value
                .get("api")
                .and_then(|a| a.get("timeout_ms"))
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(defaults.request_timeout_ms),
            guard_bypass: toml_value
                .get("guard")
                .and_then(|g| g.get("bypass"))
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.guard_bypass),
            data_dir: toml_value
                .get("storage")
                .and_then(|s| s.get("data_dir"))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            guard_bypass: false,
            data_dir: None,
        }
    }
}
