//! Client-side token storage

use std::path::PathBuf;
use std::sync::RwLock;

use crate::config::Config;
use crate::error::{Error, Result};

/// Where the session token lives between requests.
///
/// `load` returns `Err` when the storage itself is unavailable, and
/// `Ok(None)` when it is reachable but holds no token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Process-local token storage
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .read()
            .map_err(|_| Error::Other("token storage lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| Error::Other("token storage lock poisoned".to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| Error::Other("token storage lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Token storage backed by the `token` entry of the config file
///
/// Nothing is cached. Every `load` reads and parses the file with blocking
/// I/O, once per request, so a token written by another process is seen on
/// the next request. Long-running callers should hold the token in a
/// [`MemoryTokenStore`] instead.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(Config::load_or_default(&self.path)?.token)
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut config = Config::load_or_default(&self.path)?;
        config.token = Some(token.to_string());
        config.save_to(&self.path)
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut config = Config::load_or_default(&self.path)?;
        config.token = None;
        config.save_to(&self.path)
    }
}
