/// Back2Me Crypto Library
///
/// Credential hashing and session-token generation for the lost-and-found
/// server. The default credential scheme is an unsalted SHA-256 digest;
/// Argon2id is available as an opt-in scheme for deployments that need it.

pub mod credentials;
pub mod digest;
pub mod token;

pub use credentials::{CredentialError, CredentialScheme};
pub use digest::digest;
pub use token::generate_session_token;
