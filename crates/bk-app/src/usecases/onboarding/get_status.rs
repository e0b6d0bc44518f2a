use std::sync::Arc;

use tracing::{info_span, Instrument};

use bk_core::onboarding::OnboardingData;
use bk_core::ports::{ApiError, OnboardingApiPort};

/// Use case for reading the onboarding progress stored by the backend.
pub struct GetOnboardingStatus {
    onboarding_api: Arc<dyn OnboardingApiPort>,
}

impl GetOnboardingStatus {
    pub fn new(onboarding_api: Arc<dyn OnboardingApiPort>) -> Self {
        Self { onboarding_api }
    }

    /// Convenience constructor for the `UseCases` accessor.
    pub fn from_ports(onboarding_api: Arc<dyn OnboardingApiPort>) -> Self {
        Self::new(onboarding_api)
    }

    pub async fn execute(&self) -> Result<OnboardingData, ApiError> {
        self.onboarding_api
            .status()
            .instrument(info_span!("usecase.onboarding.get_status"))
            .await
    }
}
