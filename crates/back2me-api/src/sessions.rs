use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use tracing::debug;

use back2me_crypto::generate_session_token;
use back2me_types::models::{AccountId, SessionClaim};

/// Opaque session tokens mapped to the identity captured at login.
///
/// Sessions never expire and cannot be revoked; they live as long as the
/// registry. Each map operation is a single insert or lookup, so a poisoned
/// lock cannot leave a half-written entry and is simply recovered.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, SessionClaim>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for the account and remember the claim.
    pub fn issue(&self, user_id: AccountId, username: &str, email: &str) -> String {
        let token = generate_session_token();
        let claim = SessionClaim {
            token: token.clone(),
            user_id,
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), claim);

        debug!("Issued session for account {}", user_id);
        token
    }

    /// `None` means the caller is unauthenticated.
    pub fn resolve(&self, token: &str) -> Option<SessionClaim> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
