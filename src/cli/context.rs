//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, session restoration and client initialization.

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::HirelinkClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::session::{FileTokenStore, Session, TokenClaims};
use crate::store::Store;

/// Context for command execution.
///
/// This is the single place where the session is initialized. Commands
/// reach the API either through the store's thunks or directly through
/// `client` for endpoints that do not touch client state.
pub struct AppContext {
    /// Resolved config file location
    pub config_path: PathBuf,
    /// Loaded configuration (defaults if the file does not exist)
    pub config: Config,
    /// API client reading the session token on every request
    pub client: Arc<HirelinkClient>,
    /// Client state, bound to the session
    pub store: Store<HirelinkClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl AppContext {
    /// Build the context and restore any persisted session.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_or_default(&config_path)?;

        let api_url = config.resolve_api_url(opts.api_url_ref());
        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_preference)
            })
            .unwrap_or_default();

        debug!("Using API {} and config {}", api_url, config_path.display());

        let session = Session::new(Arc::new(FileTokenStore::new(config_path.clone())));
        let client = Arc::new(HirelinkClient::new(&api_url, session.store())?);
        let store = Store::new(Arc::clone(&client), session);
        store.restore_session().await;

        Ok(Self {
            config_path,
            config,
            client,
            store,
            format,
        })
    }

    /// Identity of the signed-in user, or an error telling them to log in.
    pub async fn require_user(&self) -> Result<TokenClaims> {
        self.store
            .select(|state| crate::store::selectors::current_user(state).cloned())
            .await
            .filter(TokenClaims::is_valid)
            .ok_or_else(|| ConfigError::NotLoggedIn.into())
    }
}
