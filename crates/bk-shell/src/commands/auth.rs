use tracing::{info_span, Instrument};

use bk_app::usecases::session::{LOGIN_FAILURE_MESSAGE, REGISTER_FAILURE_MESSAGE};
use bk_core::security::SecretString;
use bk_core::{LoginCredentials, RegisterCredentials, Route, User};

use crate::bootstrap::AppRuntime;

/// Sign in, then head for the dashboard. The guard sends users who have not
/// finished onboarding to the wizard instead.
pub async fn login(
    runtime: &AppRuntime,
    email: String,
    password: SecretString,
) -> Result<User, String> {
    let span = info_span!("command.auth.login");
    async {
        let user = runtime
            .usecases()
            .session()
            .login(LoginCredentials::new(email, password))
            .await
            .map_err(|e| e.display_message(LOGIN_FAILURE_MESSAGE))?;
        runtime.deps.navigator.navigate(Route::Dashboard);
        Ok(user)
    }
    .instrument(span)
    .await
}

/// Create an account and start onboarding.
pub async fn register(
    runtime: &AppRuntime,
    name: String,
    email: String,
    password: SecretString,
    phone: Option<String>,
) -> Result<User, String> {
    let span = info_span!("command.auth.register");
    async {
        let user = runtime
            .usecases()
            .session()
            .register(RegisterCredentials {
                email,
                password,
                name,
                phone,
            })
            .await
            .map_err(|e| e.display_message(REGISTER_FAILURE_MESSAGE))?;
        runtime.usecases().onboarding().reset().await;
        runtime.deps.navigator.navigate(Route::Onboarding);
        Ok(user)
    }
    .instrument(span)
    .await
}

/// Always succeeds; local credentials are gone afterwards.
pub async fn logout(runtime: &AppRuntime) {
    let span = info_span!("command.auth.logout");
    async {
        runtime.usecases().session().logout().await;
        runtime.deps.navigator.navigate(Route::Login);
    }
    .instrument(span)
    .await
}

pub fn whoami(runtime: &AppRuntime) -> Option<User> {
    runtime.usecases().session().current_user()
}
