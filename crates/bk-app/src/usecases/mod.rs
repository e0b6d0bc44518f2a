pub mod dashboard;
pub mod onboarding;
pub mod session;
