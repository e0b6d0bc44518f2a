use async_trait::async_trait;

use bk_core::identity::{AuthResponse, LoginCredentials, RegisterCredentials, User};
use bk_core::ports::{ApiError, AuthApiPort};

use super::client::{endpoints, HttpApiClient};

#[async_trait]
impl AuthApiPort for HttpApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        self.post_json(endpoints::AUTH_LOGIN, credentials).await
    }

    async fn register(&self, credentials: &RegisterCredentials) -> Result<AuthResponse, ApiError> {
        self.post_json(endpoints::AUTH_REGISTER, credentials).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_discard(endpoints::AUTH_LOGOUT).await
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.get_json(endpoints::AUTH_ME, &[]).await
    }
}
