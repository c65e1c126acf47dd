//! Session Credential Store
//!
//! Holds the one bearer token for the active session. The session is either
//! Unauthenticated (no token, only login is possible) or Authenticated; there
//! are no other states. Interior mutability keeps the store shareable from
//! the [`Dashboard`](super::Dashboard) context without a writer lock dance -
//! each session is single-user and single-threaded by design scope.

use std::sync::Mutex;

/// Stores the opaque bearer credential for the active session
#[derive(Debug, Default)]
pub struct SessionStore {
    token: Mutex<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly issued token, entering the Authenticated state
    pub fn set_token(&self, token: String) {
        *self.token.lock().unwrap() = Some(token);
    }

    /// Discard the credential, returning to Unauthenticated
    pub fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.lock().unwrap().is_some()
    }

    /// `Authorization` header value for the current token
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    /// `Cookie` header value for the current token
    pub fn cookie(&self) -> Option<String> {
        self.token().map(|t| format!("token={}", t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert_eq!(store.bearer(), None);
        assert_eq!(store.cookie(), None);

        store.set_token("abc".to_string());
        assert!(store.is_authenticated());
        assert_eq!(store.bearer().as_deref(), Some("Bearer abc"));
        assert_eq!(store.cookie().as_deref(), Some("token=abc"));

        store.clear();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_token_replacement() {
        let store = SessionStore::new();
        store.set_token("first".to_string());
        store.set_token("second".to_string());
        assert_eq!(store.token().as_deref(), Some("second"));
    }
}
