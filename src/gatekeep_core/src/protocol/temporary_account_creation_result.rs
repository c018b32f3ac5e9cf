use crate::domain::validation_error::{ValidationError, ValidationErrors};

/// Flag set describing why a temporary account could not be created.
///
/// Unlike [`ValidationErrors`] it also covers conflicts with existing accounts
/// and technical failures, which only the service layer can detect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TemporaryAccountCreationResult {
    pub email_missing: bool,
    pub email_invalid: bool,
    pub account_existing: bool,
    pub email_existing: bool,
    pub invalid_login: bool,
    pub invalid_password: bool,
    pub technical_issue: bool,
}

impl TemporaryAccountCreationResult {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn technical_issue() -> Self {
        Self {
            technical_issue: true,
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.email_missing
            || self.email_invalid
            || self.account_existing
            || self.email_existing
            || self.invalid_login
            || self.invalid_password
            || self.technical_issue
    }
}

impl From<&ValidationErrors> for TemporaryAccountCreationResult {
    fn from(errors: &ValidationErrors) -> Self {
        let mut result = Self::default();
        for error in errors {
            match error {
                ValidationError::EmailMissing => result.email_missing = true,
                ValidationError::EmailInvalid => result.email_invalid = true,
                e if e.is_login_error() => result.invalid_login = true,
                _ => result.invalid_password = true,
            }
        }
        result
    }
}
