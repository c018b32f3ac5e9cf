use chrono::Utc;
use gatekeep_core::{AccountStore, AccountStoreError, PasswordHasher, Token, Validator};
use rand::Rng;

/// Error types for authenticate use case
#[derive(Debug, thiserror::Error)]
pub enum AuthenticateError {
    #[error("Account store error: {0}")]
    Store(#[from] AccountStoreError),
}

/// Authenticate use case - turns a login attempt into a [`Token`]
///
/// Every expected failure (bad input, unknown login, banned account, wrong
/// password) is reported as a token status, not as an error.
pub struct AuthenticateUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    account_store: &'a S,
    hasher: &'a H,
    validator: &'a Validator,
}

impl<'a, S, H> AuthenticateUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    pub fn new(account_store: &'a S, hasher: &'a H, validator: &'a Validator) -> Self {
        Self {
            account_store,
            hasher,
            validator,
        }
    }

    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        login: Option<&str>,
        password: Option<&str>,
    ) -> Result<Token, AuthenticateError> {
        let credential = match self.validator.check(login, password) {
            Ok(credential) => credential,
            Err(errors) => {
                tracing::debug!(codes = ?errors.codes(), "Rejected malformed credential");
                return Ok(Token::authentication_failed());
            }
        };

        let account = match self.account_store.get_account(credential.login()).await {
            Ok(account) => account,
            Err(AccountStoreError::AccountNotFound) => return Ok(Token::not_found()),
            Err(e) => return Err(e.into()),
        };

        if !self.hasher.verify(credential.password(), account.password()) {
            return Ok(Token::authentication_failed());
        }

        // Only reported to callers who proved the password.
        if self.account_store.is_banned(account.id()).await? {
            tracing::info!(subject = %account.id(), "Banned account tried to authenticate");
            return Ok(Token::banned());
        }

        let now = Utc::now().timestamp_millis();
        let key = rand::rng().random_range(0..i32::MAX);
        let token = match Token::authenticated(account.id(), now, key) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "System clock is before the epoch");
                return Ok(Token::authentication_failed());
            }
        };

        self.account_store
            .update_account(account.with_last_connection_time(now))
            .await?;

        Ok(token)
    }
}
