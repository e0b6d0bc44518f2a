//! # Application Dependencies
//!
//! Dependency grouping for runtime construction.
//!
//! **Note**: This is NOT a Builder pattern. No build steps, no defaults and
//! no hidden logic, just parameter grouping.

use std::sync::Arc;

use bk_core::ports::*;

/// Application dependency grouping. All dependencies are required.
#[derive(Clone)]
pub struct AppDeps {
    // Backend dependencies
    pub auth_api: Arc<dyn AuthApiPort>,
    pub onboarding_api: Arc<dyn OnboardingApiPort>,
    pub dashboard_api: Arc<dyn DashboardApiPort>,

    // Local state dependencies
    pub token_store: Arc<dyn TokenStorePort>,
    pub navigator: Arc<dyn NavigatorPort>,
}
