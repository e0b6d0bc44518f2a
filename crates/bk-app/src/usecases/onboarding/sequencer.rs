//! Onboarding sequencer.
//!
//! Drives [`OnboardingStateMachine`] and executes its actions against the
//! backend, the session store and the navigator.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use bk_core::onboarding::{
    OnboardingAction, OnboardingEvent, OnboardingStateMachine, StepPayload, WizardState,
    COMPLETE_FAILURE_MESSAGE,
};
use bk_core::ports::{NavigatorPort, OnboardingApiPort};

use super::context::OnboardingContext;
use crate::usecases::session::SessionStore;

pub struct OnboardingSequencer {
    context: Arc<OnboardingContext>,
    onboarding_api: Arc<dyn OnboardingApiPort>,
    navigator: Arc<dyn NavigatorPort>,
    session: Arc<SessionStore>,
}

impl OnboardingSequencer {
    pub fn new(
        onboarding_api: Arc<dyn OnboardingApiPort>,
        navigator: Arc<dyn NavigatorPort>,
        session: Arc<SessionStore>,
    ) -> Self {
        Self {
            context: OnboardingContext::default().arc(),
            onboarding_api,
            navigator,
            session,
        }
    }

    pub async fn submit(&self, payload: StepPayload) -> WizardState {
        self.dispatch(OnboardingEvent::Submit(payload)).await
    }

    pub async fn back(&self) -> WizardState {
        self.dispatch(OnboardingEvent::Back).await
    }

    pub async fn skip(&self) -> WizardState {
        self.dispatch(OnboardingEvent::Skip).await
    }

    pub async fn state(&self) -> WizardState {
        self.context.get_state().await
    }

    /// Start a fresh wizard at step 1.
    pub async fn reset(&self) -> WizardState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let state = WizardState::new();
        self.context.set_state(state.clone()).await;
        state
    }

    async fn dispatch(&self, event: OnboardingEvent) -> WizardState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.onboarding_sequencer.dispatch", event = event_name(&event));
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = (current.step, current.phase);
                let label = event_name(&event);
                let (next, actions) = OnboardingStateMachine::transition(current, event);
                info!(
                    from = ?from,
                    to = ?(next.step, next.phase),
                    event = label,
                    "onboarding state transition"
                );
                // Persist before executing so side-effects observe the new phase.
                self.context.set_state(next.clone()).await;
                let follow_up_events = self.execute_actions(actions).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<OnboardingAction>) -> Vec<OnboardingEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(action = action_name(&action), "onboarding executing action");
            match action {
                OnboardingAction::SaveStep(payload) => {
                    follow_up_events.push(self.save_step(payload).await);
                }
                OnboardingAction::CompleteOnboarding => {
                    let event = match self.onboarding_api.complete().await {
                        Ok(_) => OnboardingEvent::CompleteSucceeded,
                        Err(err) => {
                            warn!(error = %err, "complete onboarding failed");
                            OnboardingEvent::CompleteFailed {
                                message: err.display_message(COMPLETE_FAILURE_MESSAGE),
                            }
                        }
                    };
                    follow_up_events.push(event);
                }
                OnboardingAction::MarkSessionOnboarded => {
                    self.session.mark_onboarding_completed();
                }
                OnboardingAction::NavigateTo(route) => {
                    self.navigator.navigate(route);
                }
            }
        }
        follow_up_events
    }

    async fn save_step(&self, payload: StepPayload) -> OnboardingEvent {
        let step = payload.step();
        let result = match &payload {
            StepPayload::BusinessDetails(details) => {
                self.onboarding_api.save_business_details(details).await
            }
            StepPayload::Goals(goals) => self.onboarding_api.save_goals(goals).await,
            StepPayload::IncomeExpense(setup) => {
                self.onboarding_api.save_income_expense(setup).await
            }
        };

        match result {
            Ok(ack) => {
                debug!(step = step.index(), success = ack.success, "onboarding step saved");
                OnboardingEvent::StepSaved { step }
            }
            Err(err) => {
                warn!(step = step.index(), error = %err, "onboarding step save failed");
                OnboardingEvent::StepSaveFailed {
                    message: err.display_message(step.save_failure_message()),
                }
            }
        }
    }
}

// Payloads stay out of logs.
fn event_name(event: &OnboardingEvent) -> &'static str {
    match event {
        OnboardingEvent::Submit(_) => "submit",
        OnboardingEvent::StepSaved { .. } => "step_saved",
        OnboardingEvent::StepSaveFailed { .. } => "step_save_failed",
        OnboardingEvent::CompleteSucceeded => "complete_succeeded",
        OnboardingEvent::CompleteFailed { .. } => "complete_failed",
        OnboardingEvent::Back => "back",
        OnboardingEvent::Skip => "skip",
    }
}

fn action_name(action: &OnboardingAction) -> &'static str {
    match action {
        OnboardingAction::SaveStep(_) => "save_step",
        OnboardingAction::CompleteOnboarding => "complete_onboarding",
        OnboardingAction::MarkSessionOnboarded => "mark_session_onboarded",
        OnboardingAction::NavigateTo(_) => "navigate",
    }
}
