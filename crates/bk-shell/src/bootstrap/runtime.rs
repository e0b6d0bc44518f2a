//! # Use Cases Accessor
//!
//! `AppRuntime` owns the long-lived application state (session store,
//! onboarding wizard, dashboard caches) and hands out use cases through
//! [`AppRuntime::usecases`].
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure the use case has a `new()` constructor taking its required ports
//! 2. Add a method to `UseCases` that calls `new()` with deps
//! 3. Commands can now call `runtime.usecases().your_use_case()`

use std::sync::Arc;

use tokio::sync::Mutex;

use bk_app::{
    AppDeps, DashboardQueries, GetOnboardingStatus, MountedDashboard, OnboardingSequencer,
    SessionStore,
};
use bk_core::app_dirs::AppDirs;
use bk_core::config::AppConfig;
use bk_core::{Route, RouteGuard, SessionSnapshot};

/// Application runtime with dependencies.
pub struct AppRuntime {
    pub deps: AppDeps,
    config: AppConfig,
    app_dirs: AppDirs,
    session: Arc<SessionStore>,
    guard: RouteGuard,
    onboarding: Arc<OnboardingSequencer>,
    dashboard_queries: DashboardQueries,
    mounted_dashboard: Mutex<Option<MountedDashboard>>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, config: AppConfig, app_dirs: AppDirs) -> Self {
        let session = Arc::new(SessionStore::new(
            deps.auth_api.clone(),
            deps.token_store.clone(),
        ));
        let onboarding = Arc::new(OnboardingSequencer::new(
            deps.onboarding_api.clone(),
            deps.navigator.clone(),
            session.clone(),
        ));
        let guard = RouteGuard::new(config.guard_bypass);

        Self {
            deps,
            config,
            app_dirs,
            session,
            guard,
            onboarding,
            dashboard_queries: DashboardQueries::new(),
            mounted_dashboard: Mutex::new(None),
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn app_dirs(&self) -> &AppDirs {
        &self.app_dirs
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn session_snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.deps.navigator.current()
    }

    pub fn dashboard_queries(&self) -> &DashboardQueries {
        &self.dashboard_queries
    }

    /// Start the widget pollers unless they are already running.
    ///
    /// Returns `true` when this call mounted the dashboard.
    pub async fn mount_dashboard(&self) -> bool {
        let mut mounted = self.mounted_dashboard.lock().await;
        if mounted.is_some() {
            return false;
        }
        *mounted = Some(MountedDashboard::mount(
            self.deps.dashboard_api.clone(),
            &self.dashboard_queries,
        ));
        true
    }

    /// Stop every widget poller. Returns `true` if the dashboard was mounted.
    pub async fn unmount_dashboard(&self) -> bool {
        self.mounted_dashboard.lock().await.take().is_some()
    }

    pub async fn is_dashboard_mounted(&self) -> bool {
        self.mounted_dashboard.lock().await.is_some()
    }
}

/// Use cases accessor, borrowed from [`AppRuntime`].
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    /// Session store shared by every command.
    pub fn session(&self) -> Arc<SessionStore> {
        self.runtime.session.clone()
    }

    /// The one onboarding wizard for this process.
    pub fn onboarding(&self) -> Arc<OnboardingSequencer> {
        self.runtime.onboarding.clone()
    }

    pub fn get_onboarding_status(&self) -> GetOnboardingStatus {
        GetOnboardingStatus::from_ports(self.runtime.deps.onboarding_api.clone())
    }
}
