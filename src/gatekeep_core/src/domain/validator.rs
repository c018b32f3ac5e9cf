use crate::domain::{
    credential::Credential,
    email,
    rules::AuthenticationRules,
    validation_error::{ValidationError, ValidationErrors},
};

/// Applies [`AuthenticationRules`] to raw user input.
///
/// Immutable once built; share it by reference (or behind an `Arc`) instead
/// of keeping a global instance.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: AuthenticationRules,
}

impl Validator {
    pub fn new(rules: AuthenticationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &AuthenticationRules {
        &self.rules
    }

    /// Validate a login/password pair.
    ///
    /// Each field reports at most one error, the first that applies in the
    /// order empty, too short, too long, invalid character. Login errors come
    /// before password errors. An absent value is treated as empty.
    pub fn check(
        &self,
        login: Option<&str>,
        password: Option<&str>,
    ) -> Result<Credential, ValidationErrors> {
        let errors: Vec<ValidationError> =
            [self.check_login(login), self.check_password(password)]
                .into_iter()
                .flatten()
                .collect();

        match ValidationErrors::from_vec(errors) {
            Some(errors) => Err(errors),
            None => Ok(Credential::new(
                login.unwrap_or_default().to_owned(),
                password.unwrap_or_default().to_owned(),
            )),
        }
    }

    pub fn check_login(&self, login: Option<&str>) -> Option<ValidationError> {
        let login = login.unwrap_or_default();
        let length = login.chars().count();
        if login.is_empty() {
            Some(ValidationError::LoginEmpty)
        } else if length < self.rules.login_min() {
            Some(ValidationError::LoginTooShort)
        } else if length > self.rules.login_max() {
            Some(ValidationError::LoginTooLong)
        } else if !self.rules.login_matches(login) {
            Some(ValidationError::InvalidLoginChar)
        } else {
            None
        }
    }

    pub fn check_password(&self, password: Option<&str>) -> Option<ValidationError> {
        let password = password.unwrap_or_default();
        let length = password.chars().count();
        if password.is_empty() {
            Some(ValidationError::PassEmpty)
        } else if length < self.rules.pass_min() {
            Some(ValidationError::PassTooShort)
        } else if length > self.rules.pass_max() {
            Some(ValidationError::PassTooLong)
        } else if !self.rules.pass_matches(password) {
            Some(ValidationError::InvalidPassChar)
        } else {
            None
        }
    }

    pub fn check_email(&self, email: Option<&str>) -> Option<ValidationError> {
        email::check_email(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use secrecy::ExposeSecret;

    fn first_error(result: Result<Credential, ValidationErrors>) -> ValidationError {
        result.unwrap_err().first()
    }

    #[test]
    fn test_happy_flow() {
        let credential = Validator::default()
            .check(Some("validLogin"), Some("validPass1"))
            .unwrap();
        assert_eq!(credential.login(), "validLogin");
        assert_eq!(credential.password().expose_secret(), "validPass1");
    }

    #[test]
    fn test_login_too_short() {
        let result = Validator::default().check(Some("ab"), Some("validPass1"));
        assert_eq!(first_error(result), ValidationError::LoginTooShort);
    }

    #[test]
    fn test_login_too_long() {
        let result = Validator::default().check(Some(&"a".repeat(21)), Some("validPass1"));
        assert_eq!(first_error(result), ValidationError::LoginTooLong);
    }

    #[test]
    fn test_login_invalid_char() {
        let result = Validator::default().check(Some("bad-login"), Some("validPass1"));
        assert_eq!(first_error(result), ValidationError::InvalidLoginChar);
    }

    #[test]
    fn test_login_absent_or_empty() {
        let validator = Validator::default();
        assert_eq!(
            first_error(validator.check(None, Some("validPass1"))),
            ValidationError::LoginEmpty
        );
        assert_eq!(
            first_error(validator.check(Some(""), Some("validPass1"))),
            ValidationError::LoginEmpty
        );
    }

    #[test]
    fn test_password_too_short() {
        let result = Validator::default().check(Some("validLogin"), Some("ab"));
        assert_eq!(first_error(result), ValidationError::PassTooShort);
    }

    #[test]
    fn test_password_too_long() {
        let result = Validator::default().check(Some("validLogin"), Some(&"a".repeat(21)));
        assert_eq!(first_error(result), ValidationError::PassTooLong);
    }

    #[test]
    fn test_password_invalid_char() {
        let result = Validator::default().check(Some("validLogin"), Some("pass word"));
        assert_eq!(first_error(result), ValidationError::InvalidPassChar);
    }

    #[test]
    fn test_password_absent() {
        let result = Validator::default().check(Some("validLogin"), None);
        assert_eq!(first_error(result), ValidationError::PassEmpty);
    }

    #[test]
    fn test_one_error_per_field_login_first() {
        let errors = Validator::default().check(Some("a!"), None).unwrap_err();
        assert_eq!(
            errors.as_slice(),
            &[ValidationError::LoginTooShort, ValidationError::PassEmpty]
        );
    }

    #[test]
    fn test_length_checked_before_pattern() {
        let errors = Validator::default()
            .check(Some("!!!!!!!!!!!!!!!!!!!!!!!!"), Some("!!"))
            .unwrap_err();
        assert_eq!(
            errors.as_slice(),
            &[ValidationError::LoginTooLong, ValidationError::PassTooShort]
        );
    }

    #[test]
    fn test_login_max_uses_login_bound() {
        let rules = AuthenticationRules::new(4, 20, 1, 1, "[a-z]*", "[a-z]*").unwrap();
        let result = Validator::new(rules).check(Some("abcde"), Some("abcde"));
        assert_eq!(first_error(result), ValidationError::LoginTooLong);
    }

    #[test]
    fn test_length_counts_characters() {
        let rules = AuthenticationRules::new(3, 20, 3, 1, ".*", ".*").unwrap();
        assert!(Validator::new(rules).check(Some("éàü"), Some("x")).is_ok());
    }

    #[quickcheck]
    fn prop_short_login_reports_too_short_first(login: String) -> TestResult {
        let length = login.chars().count();
        if login.is_empty() || length >= 3 {
            return TestResult::discard();
        }
        let result = Validator::default().check(Some(&login), Some("validPass1"));
        TestResult::from_bool(first_error(result) == ValidationError::LoginTooShort)
    }

    #[quickcheck]
    fn prop_alphanumeric_in_bounds_is_valid(login: String, password: String) -> TestResult {
        let login: String = login
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(20)
            .collect();
        let password: String = password
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(20)
            .collect();
        if login.len() < 3 || password.len() < 5 {
            return TestResult::discard();
        }
        let credential = Validator::default().check(Some(&login), Some(&password));
        TestResult::from_bool(credential == Ok(Credential::unchecked(login, password)))
    }
}
