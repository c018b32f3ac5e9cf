use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const DEFAULT_LOGIN_MIN_LENGTH: usize = 3;
pub const DEFAULT_LOGIN_MAX_LENGTH: usize = 20;
pub const DEFAULT_PASS_MIN_LENGTH: usize = 5;
pub const DEFAULT_PASS_MAX_LENGTH: usize = 20;
pub const DEFAULT_PATTERN: &str = "[a-zA-Z0-9]*";

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| anchored(DEFAULT_PATTERN).expect("default pattern is a valid regex"));

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Login max value ({max}) must be greater or equal to login min value ({min})")]
    LoginBounds { min: i64, max: i64 },
    #[error("Password max value ({max}) must be greater or equal to password min value ({min})")]
    PasswordBounds { min: i64, max: i64 },
    #[error("Login min value must be greater or equal to 0, value is {0}")]
    NegativeLoginMin(i64),
    #[error("Password min value must be greater or equal to 0, value is {0}")]
    NegativePasswordMin(i64),
    #[error("Invalid {field} pattern: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Shape constraints applied to logins and passwords.
///
/// Built once at startup and shared read-only. Patterns always match the
/// whole input, so `[a-z]*` rejects `abc!` rather than finding `abc` in it.
#[derive(Debug, Clone)]
pub struct AuthenticationRules {
    login_min: usize,
    login_max: usize,
    login_pattern: Regex,
    pass_min: usize,
    pass_max: usize,
    pass_pattern: Regex,
}

impl AuthenticationRules {
    /// Maxima come first, then minima.
    pub fn new(
        login_max: i64,
        pass_max: i64,
        login_min: i64,
        pass_min: i64,
        login_pattern: &str,
        pass_pattern: &str,
    ) -> Result<Self, RulesError> {
        if login_max < login_min {
            return Err(RulesError::LoginBounds {
                min: login_min,
                max: login_max,
            });
        }
        if pass_max < pass_min {
            return Err(RulesError::PasswordBounds {
                min: pass_min,
                max: pass_max,
            });
        }
        let login_min =
            usize::try_from(login_min).map_err(|_| RulesError::NegativeLoginMin(login_min))?;
        let pass_min =
            usize::try_from(pass_min).map_err(|_| RulesError::NegativePasswordMin(pass_min))?;

        let login_pattern =
            anchored(login_pattern).map_err(|source| RulesError::InvalidPattern {
                field: "login",
                source,
            })?;
        let pass_pattern = anchored(pass_pattern).map_err(|source| RulesError::InvalidPattern {
            field: "password",
            source,
        })?;

        Ok(Self {
            login_min,
            // max >= min >= 0 at this point
            login_max: login_max as usize,
            login_pattern,
            pass_min,
            pass_max: pass_max as usize,
            pass_pattern,
        })
    }

    pub fn login_min(&self) -> usize {
        self.login_min
    }

    pub fn login_max(&self) -> usize {
        self.login_max
    }

    pub fn pass_min(&self) -> usize {
        self.pass_min
    }

    pub fn pass_max(&self) -> usize {
        self.pass_max
    }

    pub fn login_matches(&self, login: &str) -> bool {
        self.login_pattern.is_match(login)
    }

    pub fn pass_matches(&self, password: &str) -> bool {
        self.pass_pattern.is_match(password)
    }
}

impl Default for AuthenticationRules {
    /// Login 3-20 and password 5-20 characters, alphanumeric only.
    fn default() -> Self {
        Self {
            login_min: DEFAULT_LOGIN_MIN_LENGTH,
            login_max: DEFAULT_LOGIN_MAX_LENGTH,
            login_pattern: ALPHANUMERIC.clone(),
            pass_min: DEFAULT_PASS_MIN_LENGTH,
            pass_max: DEFAULT_PASS_MAX_LENGTH,
            pass_pattern: ALPHANUMERIC.clone(),
        }
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}
