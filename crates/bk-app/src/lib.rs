//! Bossika Na Credit application layer
//!
//! Use cases driving the session, the onboarding wizard and the dashboard
//! widgets. Everything here talks to the outside world through the ports in
//! `bk-core`.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::dashboard::{DashboardQueries, MountedDashboard, QueryCache, QueryState};
pub use usecases::onboarding::{GetOnboardingStatus, OnboardingSequencer};
pub use usecases::session::{AuthError, SessionStore};
