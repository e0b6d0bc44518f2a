//! # Configuration Loader
//!
//! Reads the TOML config file into [`AppConfig`], then layers environment
//! variables and command-line flags on top, in that order.
//!
//! The file loader performs no validation: whatever is in the file is taken
//! as fact, missing keys fall back to the DTO defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bk_core::config::AppConfig;

pub const ENV_API_BASE_URL: &str = "BOSSIKA_API_BASE_URL";
pub const ENV_GUARD_BYPASS: &str = "BOSSIKA_GUARD_BYPASS";

/// Values supplied on the command line. `None`/`false` leaves the config as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub bypass_guard: bool,
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Resolve the effective configuration.
///
/// An explicit `config_path` must exist. The default path is optional and its
/// absence yields defaults.
pub fn resolve_config(
    explicit_path: Option<&Path>,
    default_path: Option<PathBuf>,
    overrides: &ConfigOverrides,
) -> anyhow::Result<AppConfig> {
    let config = match (explicit_path, default_path) {
        (Some(path), _) => load_config(path)?,
        (None, Some(path)) if path.exists() => load_config(&path)?,
        _ => AppConfig::default(),
    };
    let config = apply_env_overrides(config, |key| std::env::var(key).ok());
    Ok(apply_flag_overrides(config, overrides))
}

/// Apply `BOSSIKA_*` variables read through `lookup`.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(url) = lookup(ENV_API_BASE_URL).filter(|url| !url.trim().is_empty()) {
        config.api_base_url = url.trim().to_string();
    }
    if let Some(bypass) = lookup(ENV_GUARD_BYPASS).and_then(|raw| parse_bool(&raw)) {
        config.guard_bypass = bypass;
    }
    config
}

pub fn apply_flag_overrides(mut config: AppConfig, overrides: &ConfigOverrides) -> AppConfig {
    if let Some(url) = &overrides.api_base_url {
        config.api_base_url = url.clone();
    }
    if overrides.bypass_guard {
        config.guard_bypass = true;
    }
    config
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            base_url = "https://staging.bossika.test/api"
            timeout_ms = 10000

            [guard]
            bypass = true
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.api_base_url, "https://staging.bossika.test/api");
        assert_eq!(config.request_timeout_ms, 10_000);
        assert!(config.guard_bypass);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[api\nbase_url = ").unwrap();

        let result = load_config(temp_file.path());

        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("TOML"));
    }

    #[test]
    fn test_resolve_config_missing_default_file_uses_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("config.toml");

        let config = resolve_config(None, Some(missing), &ConfigOverrides::default()).unwrap();

        assert_eq!(
            config.request_timeout_ms,
            AppConfig::default().request_timeout_ms
        );
    }

    #[test]
    fn test_resolve_config_missing_explicit_file_is_an_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let result = resolve_config(Some(&missing), None, &ConfigOverrides::default());

        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_apply_over_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_API_BASE_URL, "http://10.0.0.5:8000/api"),
            (ENV_GUARD_BYPASS, "1"),
        ]);

        let config = apply_env_overrides(AppConfig::default(), |key| {
            env.get(key).map(|value| value.to_string())
        });

        assert_eq!(config.api_base_url, "http://10.0.0.5:8000/api");
        assert!(config.guard_bypass);
    }

    #[test]
    fn test_unparseable_bypass_env_is_ignored() {
        let config = apply_env_overrides(AppConfig::default(), |key| {
            (key == ENV_GUARD_BYPASS).then(|| "maybe".to_string())
        });
        assert!(!config.guard_bypass);
    }

    #[test]
    fn test_flags_win_over_everything() {
        let base = AppConfig {
            api_base_url: "http://from-file/api".to_string(),
            ..AppConfig::default()
        };
        let overrides = ConfigOverrides {
            api_base_url: Some("http://from-flag/api".to_string()),
            bypass_guard: true,
        };

        let config = apply_flag_overrides(base, &overrides);

        assert_eq!(config.api_base_url, "http://from-flag/api");
        assert!(config.guard_bypass);
    }
}
