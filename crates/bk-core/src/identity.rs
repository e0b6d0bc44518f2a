//! Identity and authentication models.
//!
//! These mirror the payloads exchanged with the `/auth/*` endpoints.

use serde::{Deserialize, Serialize};

use crate::security::SecretString;

/// The authenticated user's profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub onboarding_completed: bool,
    pub created_at: String,
}

/// Opaque token pair issued by `/auth/login` and `/auth/register`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: SecretString,
    pub refresh_token: SecretString,
}

impl std::fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokens").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

impl AuthResponse {
    /// Split the response into the token pair and the identity.
    pub fn into_parts(self) -> (AuthTokens, User) {
        (
            AuthTokens {
                access_token: SecretString::new(self.access_token),
                refresh_token: SecretString::new(self.refresh_token),
            },
            self.user,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: SecretString,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterCredentials {
    pub email: String,
    pub password: SecretString,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
