use std::fmt;

use thiserror::Error;

/// A single reason why user input was rejected.
///
/// Human readable text is left to the caller: [`ValidationError::code`]
/// is the stable key to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("login is empty")]
    LoginEmpty,
    #[error("login is too short")]
    LoginTooShort,
    #[error("login is too long")]
    LoginTooLong,
    #[error("login contains invalid characters")]
    InvalidLoginChar,
    #[error("password is empty")]
    PassEmpty,
    #[error("password is too short")]
    PassTooShort,
    #[error("password is too long")]
    PassTooLong,
    #[error("password contains invalid characters")]
    InvalidPassChar,
    #[error("email is missing")]
    EmailMissing,
    #[error("email is invalid")]
    EmailInvalid,
}

impl ValidationError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::LoginEmpty => "connect.login_empty",
            Self::LoginTooShort => "connect.login_short",
            Self::LoginTooLong => "connect.login_long",
            Self::InvalidLoginChar => "connect.login.invalid",
            Self::PassEmpty => "connect.pwd_empty",
            Self::PassTooShort => "connect.pwd_short",
            Self::PassTooLong => "connect.pwd_long",
            Self::InvalidPassChar => "connect.pwd.invalid",
            Self::EmailMissing => "email.mandatory",
            Self::EmailInvalid => "email.invalid",
        }
    }

    pub const fn is_login_error(&self) -> bool {
        matches!(
            self,
            Self::LoginEmpty | Self::LoginTooShort | Self::LoginTooLong | Self::InvalidLoginChar
        )
    }

    pub const fn is_password_error(&self) -> bool {
        matches!(
            self,
            Self::PassEmpty | Self::PassTooShort | Self::PassTooLong | Self::InvalidPassChar
        )
    }
}

/// Ordered list of everything wrong with a piece of input. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Returns `None` when there is nothing to report.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn first(&self) -> ValidationError {
        // non-empty by construction
        self.0[0]
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.0.iter().map(ValidationError::code).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [ValidationError; 10] = [
        ValidationError::LoginEmpty,
        ValidationError::LoginTooShort,
        ValidationError::LoginTooLong,
        ValidationError::InvalidLoginChar,
        ValidationError::PassEmpty,
        ValidationError::PassTooShort,
        ValidationError::PassTooLong,
        ValidationError::InvalidPassChar,
        ValidationError::EmailMissing,
        ValidationError::EmailInvalid,
    ];

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = ALL.iter().map(ValidationError::code).collect();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(ValidationError::LoginEmpty.code(), "connect.login_empty");
        assert_eq!(ValidationError::InvalidPassChar.code(), "connect.pwd.invalid");
        assert_eq!(ValidationError::EmailMissing.code(), "email.mandatory");
    }

    #[test]
    fn test_field_classification() {
        for error in ALL {
            assert!(!(error.is_login_error() && error.is_password_error()));
        }
        assert!(ValidationError::LoginTooLong.is_login_error());
        assert!(ValidationError::PassTooShort.is_password_error());
        assert!(!ValidationError::EmailInvalid.is_login_error());
        assert!(!ValidationError::EmailInvalid.is_password_error());
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_display_lists_every_error() {
        let errors = ValidationErrors::from_vec(vec![
            ValidationError::LoginEmpty,
            ValidationError::PassEmpty,
        ])
        .unwrap();
        assert_eq!(
            errors.to_string(),
            "validation failed: login is empty, password is empty"
        );
        assert_eq!(errors.codes(), vec!["connect.login_empty", "connect.pwd_empty"]);
    }
}
