use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

/// A login and its clear-text password.
///
/// Obtained checked through [`Validator::check`](crate::Validator::check), or
/// unchecked through [`Credential::unchecked`] when the data is already trusted
/// (storage, wire decoding).
#[derive(Debug, Clone)]
pub struct Credential {
    login: String,
    password: Secret<String>,
}

impl Credential {
    pub(crate) fn new(login: String, password: String) -> Self {
        Self {
            login,
            password: Secret::new(password),
        }
    }

    pub fn unchecked(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(login.into(), password.into())
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.login == other.login && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl Eq for Credential {}

impl Hash for Credential {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.login.hash(state);
        self.password.expose_secret().hash(state);
    }
}
