use std::sync::LazyLock;

use regex::Regex;

use crate::domain::validation_error::ValidationError;

// RFC 5322 single-line address: dot-atom or quoted local part, then a dotted
// domain or a bracketed IPv4 / general address literal.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
        r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
        r#"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"#,
        r#"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}"#,
        r#"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?"#,
        r#"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
    ))
    .expect("EMAIL_REGEX is a valid regex pattern")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Absent is reported as [`ValidationError::EmailMissing`], malformed as
/// [`ValidationError::EmailInvalid`].
pub fn check_email(email: Option<&str>) -> Option<ValidationError> {
    match email {
        None => Some(ValidationError::EmailMissing),
        Some(email) if !is_valid_email(email) => Some(ValidationError::EmailInvalid),
        Some(_) => None,
    }
}
