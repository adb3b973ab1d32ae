use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

/// Id token of the account most recently signed in through the identity
/// adapter. Firestore requests carry it as their bearer token.
#[derive(Default)]
pub struct FirebaseSession {
    id_token: RwLock<Option<SecretString>>,
}

impl FirebaseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id_token(&self, token: String) {
        match self.id_token.write() {
            Ok(mut guard) => *guard = Some(SecretString::from(token)),
            Err(_) => warn!("Firebase session lock poisoned; id token not stored"),
        }
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.id_token
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|t| t.expose_secret().to_string()))
    }
}
