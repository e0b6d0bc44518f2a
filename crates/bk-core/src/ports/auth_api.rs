//! Authentication endpoints (`/auth/*`).

use async_trait::async_trait;

use crate::identity::{AuthResponse, LoginCredentials, RegisterCredentials, User};
use crate::ports::errors::ApiError;

#[async_trait]
pub trait AuthApiPort: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError>;

    async fn register(&self, credentials: &RegisterCredentials) -> Result<AuthResponse, ApiError>;

    /// Invalidate the server-side session.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Identity bound to the stored access token.
    async fn me(&self) -> Result<User, ApiError>;
}
