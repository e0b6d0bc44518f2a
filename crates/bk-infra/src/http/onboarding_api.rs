use async_trait::async_trait;

use bk_core::onboarding::{
    AckResponse, BusinessDetails, BusinessGoals, IncomeExpenseSetup, OnboardingData,
};
use bk_core::ports::{ApiError, OnboardingApiPort};

use super::client::{endpoints, HttpApiClient};

#[async_trait]
impl OnboardingApiPort for HttpApiClient {
    async fn save_business_details(&self, details: &BusinessDetails) -> Result<AckResponse, ApiError> {
        self.post_json_ack(endpoints::ONBOARDING_BUSINESS, details).await
    }

    async fn save_goals(&self, goals: &BusinessGoals) -> Result<AckResponse, ApiError> {
        self.post_json_ack(endpoints::ONBOARDING_GOALS, goals).await
    }

    async fn save_income_expense(&self, setup: &IncomeExpenseSetup) -> Result<AckResponse, ApiError> {
        self.post_json_ack(endpoints::ONBOARDING_INCOME_EXPENSE, setup).await
    }

    async fn complete(&self) -> Result<AckResponse, ApiError> {
        self.post_empty_ack(endpoints::ONBOARDING_COMPLETE).await
    }

    // The backend serves stored progress from the business-details endpoint.
    async fn status(&self) -> Result<OnboardingData, ApiError> {
        self.get_json(endpoints::ONBOARDING_BUSINESS, &[]).await
    }
}
