//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `bk-app` and the
//! adapters in `bk-infra`. Use cases only ever hold `Arc<dyn ...Port>`.

pub mod app_dirs;
pub mod auth_api;
pub mod dashboard_api;
pub mod errors;
pub mod navigator;
pub mod onboarding_api;
pub mod token_store;

pub use app_dirs::AppDirsPort;
pub use auth_api::AuthApiPort;
pub use dashboard_api::DashboardApiPort;
pub use errors::{ApiError, AppDirsError, TokenStoreError};
pub use navigator::NavigatorPort;
pub use onboarding_api::OnboardingApiPort;
pub use token_store::{TokenKey, TokenStorePort};
