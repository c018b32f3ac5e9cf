use secrecy::Secret;
use thiserror::Error;

use crate::domain::password::HashedPassword;

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Invalid hashing parameters: {0}")]
    InvalidParameters(String),
    #[error("Hashing failed: {0}")]
    HashingFailed(String),
}

/// One-way password hashing capability.
///
/// Implementations are synchronous and may be slow on purpose; callers decide
/// where to run them.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &Secret<String>) -> Result<HashedPassword, PasswordHashError>;

    /// A malformed stored hash verifies as `false`.
    fn verify(&self, plaintext: &Secret<String>, hash: &HashedPassword) -> bool;
}
