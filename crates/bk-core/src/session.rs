//! Session snapshot shared between the session store and its observers.

use serde::Serialize;

use crate::identity::User;

/// Point-in-time view of the session.
///
/// Tokens are not part of the snapshot; they live in the token store and are
/// only read by the session store and the HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl SessionSnapshot {
    /// State before the initial identity refresh has resolved.
    pub fn initializing() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn onboarding_completed(&self) -> bool {
        self.user
            .as_ref()
            .map(|user| user.onboarding_completed)
            .unwrap_or(false)
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::initializing()
    }
}
