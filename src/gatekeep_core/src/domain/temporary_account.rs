use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

use crate::domain::{
    validation_error::{ValidationError, ValidationErrors},
    validator::Validator,
};

/// A sign-up waiting for email confirmation.
///
/// Equality ignores the preferred language.
#[derive(Debug, Clone)]
pub struct TemporaryAccountRequest {
    login: String,
    password: Secret<String>,
    email: String,
    language: String,
}

impl TemporaryAccountRequest {
    /// Validates login, password and email, reporting every failure at once.
    pub fn create(
        validator: &Validator,
        login: Option<&str>,
        password: Option<&str>,
        email: Option<&str>,
        language: &str,
    ) -> Result<Self, ValidationErrors> {
        let mut errors: Vec<ValidationError> = match validator.check(login, password) {
            Ok(_) => Vec::new(),
            Err(errors) => errors.into_vec(),
        };
        errors.extend(validator.check_email(email));

        if let Some(errors) = ValidationErrors::from_vec(errors) {
            return Err(errors);
        }

        Ok(Self::unchecked(
            login.unwrap_or_default(),
            password.unwrap_or_default(),
            email.unwrap_or_default(),
            language,
        ))
    }

    /// Rebuilds a request from trusted data without validating it.
    pub fn unchecked(
        login: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: Secret::new(password.into()),
            email: email.into(),
            language: language.into(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl PartialEq for TemporaryAccountRequest {
    fn eq(&self, other: &Self) -> bool {
        self.login == other.login
            && self.password.expose_secret() == other.password.expose_secret()
            && self.email == other.email
    }
}

impl Eq for TemporaryAccountRequest {}

impl Hash for TemporaryAccountRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.login.hash(state);
        self.password.expose_secret().hash(state);
        self.email.hash(state);
    }
}
