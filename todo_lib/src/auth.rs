//! Persisted authentication state.

use std::sync::{Arc, Mutex};

use todo_api::{SessionError, TokenStore};

use crate::storage::KeyValueStore;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Point-in-time view of the auth flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthSnapshot {
    fn from_token(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        Self {
            is_authenticated: token.is_some(),
            token,
        }
    }
}

/// Token and `is_authenticated` flag, written through to a [`KeyValueStore`].
///
/// Both flags change under one lock, so readers never see a token without
/// the matching flag. Hand an `Arc<AuthState>` to the API client as its
/// [`TokenStore`] so a 401 clears the persisted token too.
pub struct AuthState {
    store: Arc<dyn KeyValueStore>,
    state: Mutex<AuthSnapshot>,
}

impl AuthState {
    /// Loads the token persisted under [`TOKEN_KEY`], if any.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let state = AuthSnapshot::from_token(store.get(TOKEN_KEY));
        Self {
            store,
            state: Mutex::new(state),
        }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_authenticated
    }
}

impl TokenStore for AuthState {
    fn token(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .token
            .clone()
    }

    /// Updates both flags, then writes through. The in-memory state changes
    /// even when the write fails, so this process stops sending the old token.
    fn set_token(&self, token: Option<&str>) -> Result<(), SessionError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        *state = AuthSnapshot::from_token(token.map(str::to_string));
        let persisted = match &state.token {
            Some(token) => self.store.set(TOKEN_KEY, token),
            None => self.store.remove(TOKEN_KEY),
        };
        persisted.map_err(|e| {
            tracing::warn!("Failed to persist auth token: {}", e);
            Box::new(e) as SessionError
        })
    }
}
