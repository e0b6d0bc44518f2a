//! Navigation guard for protected routes.

use serde::Serialize;

use super::{Route, RouteRequirements};
use crate::session::SessionSnapshot;

/// Outcome of evaluating a route against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "to", rename_all = "snake_case")]
pub enum GuardDecision {
    /// The session is still resolving; show an interim state.
    Pending,
    Redirect(Route),
    Render,
}

/// Route guard with an explicit bypass switch.
///
/// `bypass` is injected from configuration at startup. When set, every route
/// renders regardless of session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteGuard {
    bypass: bool,
}

impl RouteGuard {
    pub fn new(bypass: bool) -> Self {
        Self { bypass }
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypass
    }

    pub fn evaluate(&self, requirements: RouteRequirements, session: &SessionSnapshot) -> GuardDecision {
        if self.bypass || !requirements.requires_auth {
            return GuardDecision::Render;
        }
        if session.is_loading {
            return GuardDecision::Pending;
        }
        if !session.is_authenticated() {
            return GuardDecision::Redirect(Route::Login);
        }
        if requirements.requires_onboarding && !session.onboarding_completed() {
            return GuardDecision::Redirect(Route::Onboarding);
        }
        GuardDecision::Render
    }

    pub fn evaluate_route(&self, route: Route, session: &SessionSnapshot) -> GuardDecision {
        self.evaluate(route.requirements(), session)
    }
}
