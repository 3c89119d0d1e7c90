use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use campusboard_core::{SessionToken, TokenStore, TokenStoreError};

/// Process-local token store. Clones share the same entries.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTokenStore {
    tokens: Arc<RwLock<HashMap<String, SessionToken>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self, name: &str) -> Result<Option<SessionToken>, TokenStoreError> {
        let tokens = self.tokens.read().map_err(|_| TokenStoreError::Poisoned)?;
        Ok(tokens.get(name).cloned())
    }

    fn save(&self, name: &str, token: SessionToken) -> Result<(), TokenStoreError> {
        let mut tokens = self.tokens.write().map_err(|_| TokenStoreError::Poisoned)?;
        tokens.insert(name.to_string(), token);
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), TokenStoreError> {
        let mut tokens = self.tokens.write().map_err(|_| TokenStoreError::Poisoned)?;
        tokens.remove(name);
        Ok(())
    }
}
