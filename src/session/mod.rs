//! Authentication session
//!
//! A [`Session`] is created once at start-up around a [`TokenStore`] and is
//! the only thing that writes to it. The HTTP client reads the same store on
//! every request, so a login or logout is visible to the next call without
//! any further wiring.

use std::sync::Arc;

use log::{debug, warn};

use crate::error::Result;

mod storage;
mod token;

pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use token::{TokenClaims, decode};

#[cfg(test)]
pub(crate) use token::testing;

/// Explicit authentication context
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// The storage this session writes to.
    pub fn store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }

    /// The raw stored token, if the storage is readable and holds one.
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("Token storage unavailable: {}", e);
                None
            }
        }
    }

    /// Decoded claims of the stored token, regardless of expiry.
    pub fn decoded(&self) -> Option<TokenClaims> {
        let token = self.token()?;
        decode(&token).ok()
    }

    /// Claims of the stored token if it decodes and has not expired.
    pub fn claims(&self) -> Option<TokenClaims> {
        self.decoded().filter(TokenClaims::is_valid)
    }

    /// Whether a stored, decodable, unexpired token exists.
    pub fn is_valid(&self) -> bool {
        self.claims().is_some()
    }

    /// Start a session with a freshly issued token.
    ///
    /// Tokens that cannot be decoded are rejected and nothing is stored.
    pub fn login(&self, token: &str) -> Result<TokenClaims> {
        let claims = decode(token)?;
        self.store.save(token)?;
        debug!("Session started for user {} ({})", claims.id, claims.role);
        Ok(claims)
    }

    /// Load the persisted session at start-up.
    ///
    /// A stored token that fails to decode is destroyed. An expired token is
    /// kept but yields `None`.
    pub fn restore(&self) -> Option<TokenClaims> {
        let token = self.token()?;
        match decode(&token) {
            Ok(claims) if claims.is_valid() => Some(claims),
            Ok(_) => {
                debug!("Stored session token has expired");
                None
            }
            Err(e) => {
                warn!("Discarding undecodable session token: {}", e);
                if let Err(e) = self.store.clear() {
                    warn!("Failed to clear session token: {}", e);
                }
                None
            }
        }
    }

    /// Tear the session down.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        debug!("Session ended");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_valid())
            .finish()
    }
}
