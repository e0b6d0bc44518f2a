//! Local token persistence.
//!
//! Presence of [`TokenKey::AccessToken`] is the only "is authenticated" check
//! the client performs without asking the backend.

use crate::identity::AuthTokens;
use crate::ports::errors::TokenStoreError;
use crate::security::SecretString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKey {
    AccessToken,
    RefreshToken,
}

impl TokenKey {
    pub const ALL: [TokenKey; 2] = [TokenKey::AccessToken, TokenKey::RefreshToken];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKey::AccessToken => "access_token",
            TokenKey::RefreshToken => "refresh_token",
        }
    }
}

/// Key/value token store.
pub trait TokenStorePort: Send + Sync {
    fn get(&self, key: TokenKey) -> Result<Option<SecretString>, TokenStoreError>;

    fn set(&self, key: TokenKey, value: &SecretString) -> Result<(), TokenStoreError>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: TokenKey) -> Result<(), TokenStoreError>;

    fn store_tokens(&self, tokens: &AuthTokens) -> Result<(), TokenStoreError> {
        self.set(TokenKey::AccessToken, &tokens.access_token)?;
        self.set(TokenKey::RefreshToken, &tokens.refresh_token)
    }

    /// Remove both tokens. Attempts every key before reporting the first failure.
    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut first_error = None;
        for key in TokenKey::ALL {
            if let Err(err) = self.remove(key) {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn has_access_token(&self) -> Result<bool, TokenStoreError> {
        Ok(self.get(TokenKey::AccessToken)?.is_some())
    }
}

#[cfg(test)]
mockall::mock! {
    pub TokenStore {}

    impl TokenStorePort for TokenStore {
        fn get(&self, key: TokenKey) -> Result<Option<SecretString>, TokenStoreError>;
        fn set(&self, key: TokenKey, value: &SecretString) -> Result<(), TokenStoreError>;
        fn remove(&self, key: TokenKey) -> Result<(), TokenStoreError>;
    }
}
