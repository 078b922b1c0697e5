//! In-memory dashboard sessions.
//!
//! Login is a digest comparison against configured credentials; a
//! successful login mints a random bearer token held in a process-local
//! set. Tokens die with the process. Deliberately minimal: this guards
//! a single-operator dashboard, not a multi-tenant API.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::RngCore;

/// Byte length of a session token before hex encoding.
const TOKEN_BYTES: usize = 32;

/// Process-local set of valid bearer tokens.
#[derive(Debug, Default)]
pub struct SessionStore {
    tokens: Mutex<HashSet<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint and register a new session token.
    pub fn issue(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);
        self.lock().insert(token.clone());
        token
    }

    /// Whether the token belongs to a live session.
    pub fn is_valid(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    /// Revoke a token. Returns whether it was a live session.
    pub fn revoke(&self, token: &str) -> bool {
        self.lock().remove(token)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
