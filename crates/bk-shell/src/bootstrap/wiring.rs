//! # Dependency Injection / 依赖注入
//!
//! Wires the concrete adapters from `bk-infra` into [`AppDeps`].
//!
//! This is the only place that knows which adapter backs which port.
//! Use cases and commands only ever see `Arc<dyn Port>`.

use std::sync::Arc;
use std::time::Duration;

use bk_app::AppDeps;
use bk_core::app_dirs::AppDirs;
use bk_core::config::AppConfig;
use bk_core::ports::{
    AppDirsPort, AuthApiPort, DashboardApiPort, NavigatorPort, OnboardingApiPort, TokenStorePort,
};
use bk_core::Route;
use bk_infra::{DirsAppDirsAdapter, FileTokenStore, HttpApiClient, InMemoryNavigator};

/// Errors that can occur during dependency wiring.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Failed to resolve application directories: {0}")]
    AppDirs(String),

    #[error("Failed to initialize token store: {0}")]
    TokenStoreInit(String),

    #[error("Failed to create backend HTTP client: {0}")]
    HttpClientInit(String),
}

pub type WiringResult<T> = Result<T, WiringError>;

/// Resolve data directories, honouring `[storage] data_dir` when set.
pub fn resolve_app_dirs(config: &AppConfig) -> WiringResult<AppDirs> {
    let adapter = match &config.data_dir {
        Some(root) => DirsAppDirsAdapter::with_app_data_root(root.clone()),
        None => DirsAppDirsAdapter::new(),
    };
    adapter
        .get_app_dirs()
        .map_err(|e| WiringError::AppDirs(e.to_string()))
}

/// Build every port implementation.
///
/// One [`HttpApiClient`] backs all three backend ports so they share the
/// connection pool and the token store.
pub fn wire_dependencies(config: &AppConfig, app_dirs: &AppDirs) -> WiringResult<AppDeps> {
    let token_store: Arc<dyn TokenStorePort> = Arc::new(
        FileTokenStore::new_in_app_data_root(app_dirs.app_data_root.clone())
            .map_err(|e| WiringError::TokenStoreInit(e.to_string()))?,
    );

    let client = Arc::new(
        HttpApiClient::new(
            &config.api_base_url,
            Duration::from_millis(config.request_timeout_ms),
            token_store.clone(),
        )
        .map_err(|e| WiringError::HttpClientInit(format!("{e:#}")))?,
    );

    let auth_api: Arc<dyn AuthApiPort> = client.clone();
    let onboarding_api: Arc<dyn OnboardingApiPort> = client.clone();
    let dashboard_api: Arc<dyn DashboardApiPort> = client;
    let navigator: Arc<dyn NavigatorPort> = Arc::new(InMemoryNavigator::new(Some(Route::Login)));

    tracing::debug!(
        api_base_url = %config.api_base_url,
        data_root = %app_dirs.app_data_root.display(),
        "dependencies wired"
    );

    Ok(AppDeps {
        auth_api,
        onboarding_api,
        dashboard_api,
        token_store,
        navigator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_app_dirs_uses_configured_data_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            ..AppConfig::default()
        };

        let dirs = resolve_app_dirs(&config).unwrap();

        assert_eq!(dirs.app_data_root, temp_dir.path());
    }

    #[test]
    fn test_wire_dependencies_starts_on_login_with_no_token() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        let dirs = resolve_app_dirs(&config).unwrap();

        let deps = wire_dependencies(&config, &dirs).unwrap();

        assert_eq!(deps.navigator.current(), Some(Route::Login));
        assert!(!deps.token_store.has_access_token().unwrap());
        assert!(temp_dir.path().join("tokens").is_dir());
    }
}
