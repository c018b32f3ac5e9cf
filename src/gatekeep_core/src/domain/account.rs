use rand::Rng;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use crate::{
    domain::{
        email, password::HashedPassword, subject_id::SubjectId, validation_error::{ValidationError, ValidationErrors},
        validator::Validator,
    },
    ports::password_hasher::{PasswordHashError, PasswordHasher},
};

const GENERATED_PASSWORD_LENGTH: usize = 12;
const ATTEMPTS_PER_ALPHABET: usize = 8;

/// Candidate alphabets for generated passwords, tried in order until one
/// satisfies the password pattern.
const GENERATED_PASSWORD_ALPHABETS: [&str; 4] = [
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
];

#[derive(Debug, Error)]
pub enum AccountUpdateError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Hashing(#[from] PasswordHashError),
}

/// A persisted identity whose password is already hashed.
///
/// Updates never touch the receiver; they hand back a new `Account`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: SubjectId,
    login: String,
    password: HashedPassword,
    email: String,
    last_connection_time: i64,
}

impl Account {
    pub fn new(
        id: SubjectId,
        login: impl Into<String>,
        password: HashedPassword,
        email: impl Into<String>,
        last_connection_time: i64,
    ) -> Self {
        Self {
            id,
            login: login.into(),
            password,
            email: email.into(),
            last_connection_time,
        }
    }

    pub fn id(&self) -> SubjectId {
        self.id
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &HashedPassword {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn last_connection_time(&self) -> i64 {
        self.last_connection_time
    }

    /// Checks the new password against the password rules, then hashes it.
    pub fn change_password<H: PasswordHasher + ?Sized>(
        &self,
        new_password: &Secret<String>,
        validator: &Validator,
        hasher: &H,
    ) -> Result<Self, AccountUpdateError> {
        let plaintext = new_password.expose_secret().as_str();
        if let Some(error) = validator.check_password(Some(plaintext)) {
            return Err(ValidationErrors::from(error).into());
        }
        let password = hasher.hash(new_password)?;
        Ok(Self {
            password,
            ..self.clone()
        })
    }

    pub fn change_email(&self, new_email: &str) -> Result<Self, ValidationErrors> {
        if let Some(error) = email::check_email(Some(new_email)) {
            return Err(error.into());
        }
        Ok(Self {
            email: new_email.to_owned(),
            ..self.clone()
        })
    }

    /// Replaces the password with a random one accepted by the password rules.
    ///
    /// Returns the updated account and the generated clear-text password,
    /// which the caller has to deliver to the owner.
    pub fn reset_password<H: PasswordHasher + ?Sized>(
        &self,
        validator: &Validator,
        hasher: &H,
    ) -> Result<(Self, Secret<String>), AccountUpdateError> {
        let generated = generate_password(validator)?;
        let password = hasher.hash(&generated)?;
        Ok((
            Self {
                password,
                ..self.clone()
            },
            generated,
        ))
    }

    pub fn with_last_connection_time(&self, last_connection_time: i64) -> Self {
        Self {
            last_connection_time,
            ..self.clone()
        }
    }
}

fn generate_password(validator: &Validator) -> Result<Secret<String>, ValidationErrors> {
    let rules = validator.rules();
    let length = GENERATED_PASSWORD_LENGTH.clamp(rules.pass_min(), rules.pass_max());
    let mut rng = rand::rng();
    let mut last_error = ValidationError::InvalidPassChar;

    for alphabet in GENERATED_PASSWORD_ALPHABETS {
        let alphabet: Vec<char> = alphabet.chars().collect();
        for _ in 0..ATTEMPTS_PER_ALPHABET {
            let candidate: String = (0..length)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();
            match validator.check_password(Some(candidate.as_str())) {
                None => return Ok(Secret::new(candidate)),
                Some(error) => last_error = error,
            }
        }
    }

    Err(last_error.into())
}
