use std::collections::HashMap;
use std::sync::Mutex;

use bk_core::ports::{TokenKey, TokenStoreError, TokenStorePort};
use bk_core::security::SecretString;

/// Process-local token store for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemoryTokenStore {
    values: Mutex<HashMap<TokenKey, SecretString>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<TokenKey, SecretString>>, TokenStoreError> {
        self.values
            .lock()
            .map_err(|_| TokenStoreError::Io("token store lock poisoned".to_string()))
    }
}

impl TokenStorePort for InMemoryTokenStore {
    fn get(&self, key: TokenKey) -> Result<Option<SecretString>, TokenStoreError> {
        Ok(self.lock()?.get(&key).cloned())
    }

    fn set(&self, key: TokenKey, value: &SecretString) -> Result<(), TokenStoreError> {
        self.lock()?.insert(key, value.clone());
        Ok(())
    }

    fn remove(&self, key: TokenKey) -> Result<(), TokenStoreError> {
        self.lock()?.remove(&key);
        Ok(())
    }
}
