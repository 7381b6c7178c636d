//! Wires configuration, persisted state and the API client together.

use std::sync::Arc;

use todo_api::{Client, TokenStore};

use crate::auth::AuthState;
use crate::config::AppConfig;
use crate::error::TodoAppError;
use crate::storage::{FileStore, KeyValueStore};
use crate::theme::ThemeState;

/// Everything a front-end needs: the client plus the auth and theme state
/// it shares with the UI.
pub struct App {
    pub client: Client,
    pub auth: Arc<AuthState>,
    pub theme: ThemeState,
}

impl App {
    /// Opens the state file named in `config` and builds the client.
    pub fn open(config: &AppConfig) -> Result<Self, TodoAppError> {
        let store = FileStore::open(&config.state_file)?;
        Self::with_store(config, Arc::new(store))
    }

    /// Builds the app over an existing store.
    pub fn with_store(
        config: &AppConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, TodoAppError> {
        let auth = Arc::new(AuthState::load(store.clone()));
        let theme = ThemeState::load(store);
        let session: Arc<dyn TokenStore> = auth.clone();
        let client = match config.timeout {
            Some(timeout) => Client::with_timeout(&config.api_url, session, timeout)?,
            None => Client::new(&config.api_url, session)?,
        };
        tracing::debug!(
            "Using API at {} (authenticated: {})",
            config.api_url,
            auth.is_authenticated()
        );
        Ok(Self {
            client,
            auth,
            theme,
        })
    }
}
