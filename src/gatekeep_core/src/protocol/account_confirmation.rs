/// Login and the confirmation token mailed to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountConfirmation {
    login: String,
    token: String,
}

impl AccountConfirmation {
    pub fn new(login: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            token: token.into(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}
