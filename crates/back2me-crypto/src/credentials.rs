use std::str::FromStr;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::RngCore;
use thiserror::Error;

use crate::digest::digest;

/// Random bytes behind each Argon2 salt.
const SALT_BYTES: usize = 16;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("unknown credential scheme: {0}")]
    UnknownScheme(String),
}

/// How account passwords are turned into stored credentials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialScheme {
    /// Unsalted SHA-256 hex digest.
    #[default]
    Sha256,
    /// Salted Argon2id, stored as a PHC string.
    Argon2,
}

impl CredentialScheme {
    pub fn hash(&self, secret: &str) -> Result<String, CredentialError> {
        match self {
            Self::Sha256 => Ok(digest(secret)),
            Self::Argon2 => {
                let salt = generate_salt()?;
                Argon2::default()
                    .hash_password(secret.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| CredentialError::Hash(e.to_string()))
            }
        }
    }

    /// Check `secret` against a stored credential. A stored value that does
    /// not parse for this scheme never verifies.
    pub fn verify(&self, secret: &str, stored: &str) -> bool {
        match self {
            Self::Sha256 => digest(secret) == stored,
            Self::Argon2 => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default()
                    .verify_password(secret.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
        }
    }
}

fn generate_salt() -> Result<SaltString, CredentialError> {
    let mut bytes = [0u8; SALT_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    SaltString::encode_b64(&bytes).map_err(|e| CredentialError::Hash(e.to_string()))
}

impl FromStr for CredentialScheme {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            other => Err(CredentialError::UnknownScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_scheme_stores_plain_digest() {
        let stored = CredentialScheme::Sha256.hash("pw123").unwrap();
        assert_eq!(stored, digest("pw123"));
        assert!(CredentialScheme::Sha256.verify("pw123", &stored));
        assert!(!CredentialScheme::Sha256.verify("pw124", &stored));
    }

    #[test]
    fn argon2_scheme_salts_and_verifies() {
        let a = CredentialScheme::Argon2.hash("pw123").unwrap();
        let b = CredentialScheme::Argon2.hash("pw123").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
        assert!(CredentialScheme::Argon2.verify("pw123", &a));
        assert!(CredentialScheme::Argon2.verify("pw123", &b));
        assert!(!CredentialScheme::Argon2.verify("wrong", &a));
    }

    #[test]
    fn salts_are_fresh_and_phc_encoded() {
        let a = generate_salt().unwrap();
        let b = generate_salt().unwrap();
        assert_ne!(a.as_str(), b.as_str());
        // 16 bytes in unpadded base64.
        assert_eq!(a.as_str().len(), 22);
    }

    #[test]
    fn argon2_rejects_unparseable_stored_value() {
        assert!(!CredentialScheme::Argon2.verify("pw123", &digest("pw123")));
    }

    #[test]
    fn parses_scheme_names() {
        assert_eq!("sha256".parse::<CredentialScheme>().unwrap(), CredentialScheme::Sha256);
        assert_eq!("Argon2".parse::<CredentialScheme>().unwrap(), CredentialScheme::Argon2);
        assert!("md5".parse::<CredentialScheme>().is_err());
    }
}
