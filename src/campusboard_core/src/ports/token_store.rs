use std::sync::Arc;

use thiserror::Error;

use crate::domain::session_token::SessionToken;

// TokenStore port trait and errors
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Token store I/O error: {0}")]
    Io(String),
    #[error("Token store is corrupt: {0}")]
    Corrupt(String),
    #[error("Token store lock poisoned")]
    Poisoned,
}

impl PartialEq for TokenStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Io(_), Self::Io(_))
                | (Self::Corrupt(_), Self::Corrupt(_))
                | (Self::Poisoned, Self::Poisoned)
        )
    }
}

/// Client-side persistent key-value storage for session tokens, cookie style.
pub trait TokenStore: Send + Sync {
    fn load(&self, name: &str) -> Result<Option<SessionToken>, TokenStoreError>;
    fn save(&self, name: &str, token: SessionToken) -> Result<(), TokenStoreError>;
    fn remove(&self, name: &str) -> Result<(), TokenStoreError>;
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn load(&self, name: &str) -> Result<Option<SessionToken>, TokenStoreError> {
        (**self).load(name)
    }

    fn save(&self, name: &str, token: SessionToken) -> Result<(), TokenStoreError> {
        (**self).save(name, token)
    }

    fn remove(&self, name: &str) -> Result<(), TokenStoreError> {
        (**self).remove(name)
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn load(&self, name: &str) -> Result<Option<SessionToken>, TokenStoreError> {
        (**self).load(name)
    }

    fn save(&self, name: &str, token: SessionToken) -> Result<(), TokenStoreError> {
        (**self).save(name, token)
    }

    fn remove(&self, name: &str) -> Result<(), TokenStoreError> {
        (**self).remove(name)
    }
}
