//! # bk-core
//!
//! Core domain models and business logic for Bossika Na Credit.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod dashboard;
pub mod identity;
pub mod onboarding;
pub mod ports;
pub mod routing;
pub mod security;
pub mod session;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use identity::{AuthResponse, AuthTokens, LoginCredentials, RegisterCredentials, User};
pub use onboarding::{OnboardingStateMachine, OnboardingStep, WizardState};
pub use routing::{GuardDecision, Route, RouteGuard};
pub use session::SessionSnapshot;
