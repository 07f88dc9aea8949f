use back2me_crypto::CredentialError;
use thiserror::Error;

/// Failures surfaced by the record store. The `Display` text of the first
/// three variants is what clients see in the `error` field.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Username already taken")]
    HandleTaken,

    /// Covers both an unknown email and a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

pub type StoreResult<T> = Result<T, StoreError>;
