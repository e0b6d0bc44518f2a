//! Onboarding wizard commands.
//!
//! Step commands only work while the onboarding page is rendered. Step
//! failures are not command errors: they land in `WizardState::error` and are
//! shown inline with the form.

use tracing::{info_span, Instrument};

use bk_core::onboarding::{
    BusinessDetails, BusinessGoals, IncomeExpenseSetup, OnboardingData, StepPayload,
};
use bk_core::{Route, WizardState};

use crate::bootstrap::AppRuntime;

pub const STATUS_FAILURE_MESSAGE: &str = "Failed to load onboarding status";
pub const NOT_ON_ONBOARDING_MESSAGE: &str = "Open the onboarding page first (open onboarding)";

fn require_onboarding_page(runtime: &AppRuntime) -> Result<(), String> {
    match runtime.current_route() {
        Some(Route::Onboarding) => Ok(()),
        _ => Err(NOT_ON_ONBOARDING_MESSAGE.to_string()),
    }
}

async fn submit(runtime: &AppRuntime, payload: StepPayload) -> Result<WizardState, String> {
    require_onboarding_page(runtime)?;
    Ok(runtime.usecases().onboarding().submit(payload).await)
}

pub async fn submit_business_details(
    runtime: &AppRuntime,
    details: BusinessDetails,
) -> Result<WizardState, String> {
    let span = info_span!("command.onboarding.business_details");
    submit(runtime, StepPayload::BusinessDetails(details))
        .instrument(span)
        .await
}

pub async fn submit_goals(
    runtime: &AppRuntime,
    goals: BusinessGoals,
) -> Result<WizardState, String> {
    let span = info_span!("command.onboarding.goals");
    submit(runtime, StepPayload::Goals(goals))
        .instrument(span)
        .await
}

pub async fn submit_income_expense(
    runtime: &AppRuntime,
    setup: IncomeExpenseSetup,
) -> Result<WizardState, String> {
    let span = info_span!("command.onboarding.income_expense");
    submit(runtime, StepPayload::IncomeExpense(setup))
        .instrument(span)
        .await
}

pub async fn back(runtime: &AppRuntime) -> Result<WizardState, String> {
    let span = info_span!("command.onboarding.back");
    async {
        require_onboarding_page(runtime)?;
        Ok(runtime.usecases().onboarding().back().await)
    }
    .instrument(span)
    .await
}

pub async fn skip(runtime: &AppRuntime) -> Result<WizardState, String> {
    let span = info_span!("command.onboarding.skip");
    async {
        require_onboarding_page(runtime)?;
        Ok(runtime.usecases().onboarding().skip().await)
    }
    .instrument(span)
    .await
}

pub async fn wizard_state(runtime: &AppRuntime) -> WizardState {
    runtime.usecases().onboarding().state().await
}

/// Fetch the progress stored by the backend.
pub async fn onboarding_status(runtime: &AppRuntime) -> Result<OnboardingData, String> {
    let span = info_span!("command.onboarding.status");
    async {
        runtime
            .usecases()
            .get_onboarding_status()
            .execute()
            .await
            .map_err(|e| e.display_message(STATUS_FAILURE_MESSAGE))
    }
    .instrument(span)
    .await
}
