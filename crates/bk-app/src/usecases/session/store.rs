use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};

use bk_core::identity::{AuthResponse, LoginCredentials, RegisterCredentials, User};
use bk_core::ports::{ApiError, AuthApiPort, TokenStoreError, TokenStorePort};
use bk_core::session::SessionSnapshot;
use bk_core::validation::{self, ValidationErrors};

pub const LOGIN_FAILURE_MESSAGE: &str = "Login failed. Please try again.";
pub const REGISTER_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    #[error("authentication rejected: {0}")]
    Rejected(#[source] ApiError),

    #[error("failed to persist tokens: {0}")]
    TokenStore(#[from] TokenStoreError),
}

impl AuthError {
    /// Inline message for the failed attempt.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Invalid(errors) => errors.to_string(),
            AuthError::Rejected(err) => err.display_message(fallback),
            AuthError::TokenStore(_) => fallback.to_string(),
        }
    }
}

/// Holds the current identity and publishes snapshots to subscribers.
///
/// Tokens live in the token store; the identity and the loading flag live in
/// the watch channel. Only the methods below mutate either.
pub struct SessionStore {
    auth_api: Arc<dyn AuthApiPort>,
    token_store: Arc<dyn TokenStorePort>,
    state: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    pub fn new(auth_api: Arc<dyn AuthApiPort>, token_store: Arc<dyn TokenStorePort>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::initializing());
        Self {
            auth_api,
            token_store,
            state,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Resolve the initial session and drop the loading flag.
    pub async fn initialize(&self) {
        self.refresh_user().await;
        self.state.send_modify(|snapshot| snapshot.is_loading = false);
        debug!(
            authenticated = self.state.borrow().is_authenticated(),
            "session initialized"
        );
    }

    pub async fn login(&self, credentials: LoginCredentials) -> Result<User, AuthError> {
        let span = info_span!("usecase.session.login", email = %credentials.email);
        async {
            validation::validate_login(&credentials)?;
            let response = self
                .auth_api
                .login(&credentials)
                .await
                .map_err(AuthError::Rejected)?;
            self.establish(response)
        }
        .instrument(span)
        .await
    }

    pub async fn register(&self, credentials: RegisterCredentials) -> Result<User, AuthError> {
        let span = info_span!("usecase.session.register", email = %credentials.email);
        async {
            validation::validate_register(&credentials)?;
            let response = self
                .auth_api
                .register(&credentials)
                .await
                .map_err(AuthError::Rejected)?;
            self.establish(response)
        }
        .instrument(span)
        .await
    }

    /// End the session. Never fails: remote and storage errors are logged and
    /// local state is cleared regardless.
    pub async fn logout(&self) {
        let span = info_span!("usecase.session.logout");
        async {
            if let Err(err) = self.auth_api.logout().await {
                warn!(error = %err, "remote logout failed, clearing local session anyway");
            }
            self.clear();
            info!("session cleared");
        }
        .instrument(span)
        .await
    }

    /// Re-fetch the identity when an access token is stored.
    ///
    /// Any failure invalidates the session.
    pub async fn refresh_user(&self) {
        let span = info_span!("usecase.session.refresh_user");
        async {
            match self.token_store.has_access_token() {
                Ok(true) => {}
                Ok(false) => {
                    debug!("no access token, skipping identity refresh");
                    return;
                }
                Err(err) => {
                    warn!(error = %err, "failed to read access token, treating session as invalid");
                    self.clear();
                    return;
                }
            }

            match self.auth_api.me().await {
                Ok(user) => {
                    debug!(user_id = %user.id, "identity refreshed");
                    self.state.send_modify(|snapshot| snapshot.user = Some(user));
                }
                Err(err) => {
                    warn!(error = %err, "identity refresh failed, clearing session");
                    self.clear();
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Record that the current user finished onboarding.
    pub fn mark_onboarding_completed(&self) {
        self.state.send_modify(|snapshot| {
            if let Some(user) = snapshot.user.as_mut() {
                user.onboarding_completed = true;
            }
        });
    }

    fn establish(&self, response: AuthResponse) -> Result<User, AuthError> {
        let (tokens, user) = response.into_parts();
        if let Err(err) = self.token_store.store_tokens(&tokens) {
            // Do not leave half a token pair behind.
            if let Err(clear_err) = self.token_store.clear() {
                warn!(error = %clear_err, "failed to roll back partial token write");
            }
            return Err(err.into());
        }
        info!(user_id = %user.id, "session established");
        self.state.send_modify(|snapshot| snapshot.user = Some(user.clone()));
        Ok(user)
    }

    fn clear(&self) {
        if let Err(err) = self.token_store.clear() {
            warn!(error = %err, "failed to remove stored tokens");
        }
        self.state.send_modify(|snapshot| snapshot.user = None);
    }
}
