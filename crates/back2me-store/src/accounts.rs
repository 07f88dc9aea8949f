use back2me_types::models::{Account, AccountId, AccountView};
use chrono::Utc;
use tracing::{debug, info};

use crate::{Store, StoreError, StoreResult};

impl Store {
    // -- Accounts --

    /// Create an account. Email uniqueness is checked before username
    /// uniqueness, and both checks run under the same write lock as the
    /// insert so two racing registrations cannot both succeed.
    pub fn register(&self, username: &str, email: &str, password: &str) -> StoreResult<AccountId> {
        // Hash outside the lock; Argon2 is deliberately slow.
        let password_hash = self.scheme().hash(password)?;

        let id = self.write(|tables| {
            if tables.accounts.iter().any(|a| a.email == email) {
                return Err(StoreError::EmailTaken);
            }
            if tables.accounts.iter().any(|a| a.username == username) {
                return Err(StoreError::HandleTaken);
            }

            Ok(tables.accounts.insert_with(|id| Account {
                id,
                username: username.to_string(),
                email: email.to_string(),
                password: password_hash,
                created_at: Utc::now(),
            })
            .id)
        })??;

        info!("Registered account {} ({})", id, username);
        Ok(id)
    }

    /// Check an email/password pair. Unknown email and wrong password are
    /// reported identically.
    pub fn authenticate(&self, email: &str, password: &str) -> StoreResult<AccountView> {
        let account = self
            .read(|tables| tables.accounts.iter().find(|a| a.email == email).cloned())?
            .ok_or(StoreError::InvalidCredentials)?;

        if !self.scheme().verify(password, &account.password) {
            debug!("Password mismatch for account {}", account.id);
            return Err(StoreError::InvalidCredentials);
        }

        Ok(account.view())
    }

    pub fn find_account_by_email(&self, email: &str) -> StoreResult<Option<AccountView>> {
        self.read(|tables| {
            tables
                .accounts
                .iter()
                .find(|a| a.email == email)
                .map(Account::view)
        })
    }

    pub fn get_account(&self, id: AccountId) -> StoreResult<Option<AccountView>> {
        self.read(|tables| tables.accounts.iter().find(|a| a.id == id).map(Account::view))
    }

    pub fn account_count(&self) -> StoreResult<usize> {
        self.read(|tables| tables.accounts.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use back2me_crypto::{CredentialScheme, digest};

    use super::*;

    #[test]
    fn register_assigns_sequential_ids() {
        let store = Store::default();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            let before = store.account_count().unwrap();
            let id = store
                .register(name, &format!("{name}@campus.edu"), "pw")
                .unwrap();
            assert_eq!(id, before as u64 + 1);
            assert_eq!(id, i as u64 + 1);
        }
    }

    #[test]
    fn duplicate_email_is_rejected_first() {
        let store = Store::default();
        store.register("sarah_j", "sarah@campus.edu", "pw").unwrap();

        let err = store.register("other", "sarah@campus.edu", "pw").unwrap_err();
        assert!(matches!(err, StoreError::EmailTaken));

        // Both taken: the email check wins.
        let err = store.register("sarah_j", "sarah@campus.edu", "pw").unwrap_err();
        assert!(matches!(err, StoreError::EmailTaken));
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let store = Store::default();
        store.register("sarah_j", "sarah@campus.edu", "pw123").unwrap();

        let err = store.register("sarah_j", "other@campus.edu", "pw").unwrap_err();
        assert!(matches!(err, StoreError::HandleTaken));
        assert_eq!(store.account_count().unwrap(), 1);
    }

    #[test]
    fn stores_digest_not_password() {
        let store = Store::default();
        store.register("sarah_j", "sarah@campus.edu", "pw123").unwrap();

        let stored = store
            .read(|t| t.accounts.iter().next().map(|a| a.password.clone()))
            .unwrap()
            .unwrap();
        assert_ne!(stored, "pw123");
        assert_eq!(stored, digest("pw123"));
    }

    #[test]
    fn authenticate_returns_public_view() {
        let store = Store::default();
        let id = store.register("sarah_j", "sarah@campus.edu", "pw123").unwrap();

        let view = store.authenticate("sarah@campus.edu", "pw123").unwrap();
        assert_eq!(
            view,
            AccountView {
                id,
                username: "sarah_j".into(),
                email: "sarah@campus.edu".into(),
            }
        );
    }

    #[test]
    fn unknown_email_and_wrong_password_fail_identically() {
        let store = Store::default();
        store.register("sarah_j", "sarah@campus.edu", "pw123").unwrap();

        let unknown = store.authenticate("nobody@campus.edu", "pw123").unwrap_err();
        let wrong = store.authenticate("sarah@campus.edu", "nope").unwrap_err();

        assert!(matches!(unknown, StoreError::InvalidCredentials));
        assert!(matches!(wrong, StoreError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[test]
    fn argon2_store_authenticates() {
        let store = Store::new(CredentialScheme::Argon2);
        store.register("sarah_j", "sarah@campus.edu", "pw123").unwrap();

        assert!(store.authenticate("sarah@campus.edu", "pw123").is_ok());
        assert!(matches!(
            store.authenticate("sarah@campus.edu", "pw").unwrap_err(),
            StoreError::InvalidCredentials
        ));
    }

    #[test]
    fn concurrent_registrations_of_same_email_admit_one() {
        let store = Arc::new(Store::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.register(&format!("user{i}"), "same@campus.edu", "pw")
                })
            })
            .collect();

        let ok = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();
        assert_eq!(ok, 1);
        assert_eq!(store.account_count().unwrap(), 1);
    }

    #[test]
    fn lookups_by_email_and_id() {
        let store = Store::default();
        let id = store.register("michael_c", "michael@campus.edu", "pw").unwrap();

        assert_eq!(store.find_account_by_email("michael@campus.edu").unwrap().unwrap().id, id);
        assert!(store.find_account_by_email("nobody@campus.edu").unwrap().is_none());
        assert_eq!(store.get_account(id).unwrap().unwrap().username, "michael_c");
        assert!(store.get_account(99).unwrap().is_none());
    }
}
