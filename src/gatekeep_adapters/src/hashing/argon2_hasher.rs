use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use gatekeep_core::{HashedPassword, PasswordHashError, PasswordHasher};
use secrecy::{ExposeSecret, Secret};

use crate::config::HashingSettings;

/// Argon2id hasher producing PHC strings.
///
/// The cost parameters only apply to new hashes; verification reads them from
/// the stored PHC string.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(settings: &HashingSettings) -> Result<Self, PasswordHashError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| PasswordHashError::InvalidParameters(e.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    fn hash(&self, plaintext: &Secret<String>) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(rand_core::OsRng);
        self.argon2()
            .hash_password(plaintext.expose_secret().as_bytes(), &salt)
            .map(|hash| HashedPassword::from(hash.to_string()))
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    fn verify(&self, plaintext: &Secret<String>, hash: &HashedPassword) -> bool {
        let expected = match PasswordHash::new(hash.as_ref().expose_secret()) {
            Ok(expected) => expected,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        self.argon2()
            .verify_password(plaintext.expose_secret().as_bytes(), &expected)
            .is_ok()
    }
}
