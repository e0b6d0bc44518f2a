//! Onboarding wizard use cases.

mod context;
mod get_status;
mod sequencer;

pub use context::OnboardingContext;
pub use get_status::GetOnboardingStatus;
pub use sequencer::OnboardingSequencer;
