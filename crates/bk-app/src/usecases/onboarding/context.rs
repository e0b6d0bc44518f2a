use std::sync::Arc;

use tokio::sync::Mutex;

use bk_core::onboarding::WizardState;

/// Shared wizard context: current state plus a dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// `get_state` never touches `dispatch_lock`.
pub struct OnboardingContext {
    state: Mutex<WizardState>,
    /// Serializes dispatch so transition, action execution and state update
    /// run as one unit.
    dispatch_lock: Mutex<()>,
}

impl OnboardingContext {
    pub fn new(initial_state: WizardState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call while holding the dispatch lock.
    pub async fn set_state(&self, state: WizardState) {
        *self.state.lock().await = state;
    }
}

impl Default for OnboardingContext {
    fn default() -> Self {
        Self::new(WizardState::new())
    }
}
