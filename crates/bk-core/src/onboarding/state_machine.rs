//! Onboarding wizard state machine.
//!
//! Pure transition function: `(state, event) -> (state, actions)`. The
//! orchestrator in `bk-app` executes the actions against the backend and the
//! navigator, then feeds the outcome back as events.

use serde::{Deserialize, Serialize};

use super::{BusinessDetails, BusinessGoals, IncomeExpenseSetup, OnboardingStep};
use crate::routing::Route;
use crate::validation;

/// The form payload submitted for one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", content = "data", rename_all = "snake_case")]
pub enum StepPayload {
    BusinessDetails(BusinessDetails),
    Goals(BusinessGoals),
    IncomeExpense(IncomeExpenseSetup),
}

impl StepPayload {
    pub fn step(&self) -> OnboardingStep {
        match self {
            StepPayload::BusinessDetails(_) => OnboardingStep::BusinessDetails,
            StepPayload::Goals(_) => OnboardingStep::Goals,
            StepPayload::IncomeExpense(_) => OnboardingStep::IncomeExpense,
        }
    }

    fn validate(&self) -> Result<(), validation::ValidationErrors> {
        match self {
            StepPayload::BusinessDetails(details) => validation::validate_business_details(details),
            StepPayload::Goals(goals) => validation::validate_goals(goals),
            StepPayload::IncomeExpense(setup) => validation::validate_income_expense(setup),
        }
    }
}

/// What the wizard is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    /// Waiting for the user to submit the current step.
    Editing,
    /// Current step's payload is being persisted.
    Saving,
    /// Final step persisted, completion call in flight.
    Completing,
    Finished(OnboardingExit),
}

/// How the wizard was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingExit {
    Completed,
    Skipped,
}

/// Wizard state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: OnboardingStep,
    pub phase: WizardPhase,
    /// Inline display message for the last failure.
    pub error: Option<String>,
    /// Last payload accepted for each step.
    pub business_details: Option<BusinessDetails>,
    pub goals: Option<BusinessGoals>,
    pub income_expense: Option<IncomeExpenseSetup>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::BusinessDetails,
            phase: WizardPhase::Editing,
            error: None,
            business_details: None,
            goals: None,
            income_expense: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, WizardPhase::Finished(_))
    }

    pub fn completed(&self) -> bool {
        self.phase == WizardPhase::Finished(OnboardingExit::Completed)
    }

    fn record(&mut self, payload: &StepPayload) {
        match payload {
            StepPayload::BusinessDetails(details) => self.business_details = Some(details.clone()),
            StepPayload::Goals(goals) => self.goals = Some(goals.clone()),
            StepPayload::IncomeExpense(setup) => self.income_expense = Some(setup.clone()),
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingEvent {
    /// User submits the form of the current step.
    Submit(StepPayload),
    /// Backend accepted the payload of `step`.
    StepSaved { step: OnboardingStep },
    StepSaveFailed { message: String },
    /// Backend marked onboarding complete.
    CompleteSucceeded,
    CompleteFailed { message: String },
    Back,
    Skip,
}

/// Side-effects requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingAction {
    SaveStep(StepPayload),
    CompleteOnboarding,
    /// Flip the cached identity's onboarding flag so the guard lets the user in.
    MarkSessionOnboarded,
    NavigateTo(Route),
}

/// Pure onboarding state machine.
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        mut state: WizardState,
        event: OnboardingEvent,
    ) -> (WizardState, Vec<OnboardingAction>) {
        if state.is_finished() {
            return (state, Vec::new());
        }

        match (state.phase, event) {
            (_, OnboardingEvent::Skip) => {
                state.phase = WizardPhase::Finished(OnboardingExit::Skipped);
                state.error = None;
                (state, vec![OnboardingAction::NavigateTo(Route::Dashboard)])
            }
            (WizardPhase::Editing, OnboardingEvent::Back) => {
                state.step = state.step.previous();
                state.error = None;
                (state, Vec::new())
            }
            (WizardPhase::Editing, OnboardingEvent::Submit(payload)) => {
                if payload.step() != state.step {
                    state.error = Some(format!(
                        "Expected {} for step {}",
                        state.step.title(),
                        state.step.index()
                    ));
                    return (state, Vec::new());
                }
                if let Err(errors) = payload.validate() {
                    state.error = Some(errors.to_string());
                    return (state, Vec::new());
                }
                state.record(&payload);
                state.phase = WizardPhase::Saving;
                state.error = None;
                (state, vec![OnboardingAction::SaveStep(payload)])
            }
            (WizardPhase::Saving, OnboardingEvent::StepSaved { step }) if step == state.step => {
                match step.next() {
                    Some(next) => {
                        state.step = next;
                        state.phase = WizardPhase::Editing;
                        (state, Vec::new())
                    }
                    None => {
                        state.phase = WizardPhase::Completing;
                        (state, vec![OnboardingAction::CompleteOnboarding])
                    }
                }
            }
            (WizardPhase::Saving, OnboardingEvent::StepSaveFailed { message })
            | (WizardPhase::Completing, OnboardingEvent::CompleteFailed { message }) => {
                state.phase = WizardPhase::Editing;
                state.error = Some(message);
                (state, Vec::new())
            }
            (WizardPhase::Completing, OnboardingEvent::CompleteSucceeded) => {
                state.phase = WizardPhase::Finished(OnboardingExit::Completed);
                (
                    state,
                    vec![
                        OnboardingAction::MarkSessionOnboarded,
                        OnboardingAction::NavigateTo(Route::Dashboard),
                    ],
                )
            }
            (_, _) => (state, Vec::new()),
        }
    }
}
