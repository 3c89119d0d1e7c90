use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use campusboard_core::{SessionToken, TokenStore, TokenStoreError};
use secrecy::ExposeSecret;

/// Token store persisted as a JSON cookie jar (`{"name": "value", ...}`).
///
/// A missing file is an empty jar. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct CookieFileTokenStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl CookieFileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_jar(&self) -> Result<BTreeMap<String, String>, TokenStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(TokenStoreError::Io(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| TokenStoreError::Corrupt(e.to_string()))
    }

    fn write_jar(&self, jar: &BTreeMap<String, String>) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TokenStoreError::Io(e.to_string()))?;
        }

        let raw =
            serde_json::to_string_pretty(jar).map_err(|e| TokenStoreError::Corrupt(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| TokenStoreError::Io(e.to_string()))
    }
}

impl TokenStore for CookieFileTokenStore {
    fn load(&self, name: &str) -> Result<Option<SessionToken>, TokenStoreError> {
        let _guard = self.lock.lock().map_err(|_| TokenStoreError::Poisoned)?;
        Ok(self.read_jar()?.remove(name).map(SessionToken::new))
    }

    #[tracing::instrument(name = "CookieFileTokenStore::save", skip_all, fields(cookie = name))]
    fn save(&self, name: &str, token: SessionToken) -> Result<(), TokenStoreError> {
        let _guard = self.lock.lock().map_err(|_| TokenStoreError::Poisoned)?;
        let mut jar = self.read_jar()?;
        jar.insert(name.to_string(), token.as_ref().expose_secret().clone());
        self.write_jar(&jar)
    }

    #[tracing::instrument(name = "CookieFileTokenStore::remove", skip_all, fields(cookie = name))]
    fn remove(&self, name: &str) -> Result<(), TokenStoreError> {
        let _guard = self.lock.lock().map_err(|_| TokenStoreError::Poisoned)?;
        let mut jar = self.read_jar()?;
        if jar.remove(name).is_some() {
            self.write_jar(&jar)?;
        }
        Ok(())
    }
}
