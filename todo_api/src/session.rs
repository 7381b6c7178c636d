//! Bearer token storage seen by the client.

use std::sync::Mutex;

/// Failure reported by a [`TokenStore`] that could not persist a change.
pub type SessionError = Box<dyn std::error::Error + Send + Sync>;

/// Source of the bearer token attached to outgoing requests.
///
/// The client reads the token before every request and clears it when the
/// server answers 401. Implementations decide where the token lives (memory,
/// a file, a UI state container). A failed write is reported to the caller;
/// the in-memory token must still reflect the requested change.
pub trait TokenStore: Send + Sync {
    /// Returns the current token, if any.
    fn token(&self) -> Option<String>;

    /// Replaces the token. `None` or an empty string clears it.
    fn set_token(&self, token: Option<&str>) -> Result<(), SessionError>;

    /// Clears the token.
    fn clear(&self) -> Result<(), SessionError> {
        self.set_token(None)
    }
}

/// In-memory token store with last-write-wins semantics.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string()).filter(|t| !t.is_empty())),
        }
    }
}

impl TokenStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_token(&self, token: Option<&str>) -> Result<(), SessionError> {
        let token = token.filter(|t| !t.is_empty()).map(str::to_string);
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = token;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(MemorySession::new().token(), None);
    }

    #[test]
    fn set_and_clear() {
        let session = MemorySession::new();
        session.set_token(Some("abc")).unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));
        session.clear().unwrap();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn empty_string_clears() {
        let session = MemorySession::with_token("abc");
        session.set_token(Some("")).unwrap();
        assert_eq!(session.token(), None);
        assert_eq!(MemorySession::with_token("").token(), None);
    }
}
