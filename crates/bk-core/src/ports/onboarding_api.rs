//! Onboarding endpoints (`/onboarding/*`).

use async_trait::async_trait;

use crate::onboarding::{
    AckResponse, BusinessDetails, BusinessGoals, IncomeExpenseSetup, OnboardingData,
};
use crate::ports::errors::ApiError;

#[async_trait]
pub trait OnboardingApiPort: Send + Sync {
    async fn save_business_details(&self, details: &BusinessDetails) -> Result<AckResponse, ApiError>;

    async fn save_goals(&self, goals: &BusinessGoals) -> Result<AckResponse, ApiError>;

    async fn save_income_expense(&self, setup: &IncomeExpenseSetup) -> Result<AckResponse, ApiError>;

    /// Mark onboarding finished for the current user.
    async fn complete(&self) -> Result<AckResponse, ApiError>;

    async fn status(&self) -> Result<OnboardingData, ApiError>;
}
