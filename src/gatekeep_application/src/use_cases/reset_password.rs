use gatekeep_core::{
    AccountStore, AccountStoreError, AccountUpdateError, PasswordHasher, Validator,
};
use secrecy::Secret;

/// Error types for reset password use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error(transparent)]
    Rejected(#[from] AccountUpdateError),
}

/// Reset password use case - replaces the password with a generated one
pub struct ResetPasswordUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    account_store: &'a S,
    hasher: &'a H,
    validator: &'a Validator,
}

impl<'a, S, H> ResetPasswordUseCase<'a, S, H>
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

    /// Execute the reset password use case
    ///
    /// # Returns
    /// The generated clear-text password, to be delivered to the account owner
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self))]
    pub async fn execute(&self, login: &str) -> Result<Secret<String>, ResetPasswordError> {
        let account = self.account_store.get_account(login).await?;
        let (updated, generated) = account.reset_password(self.validator, self.hasher)?;
        self.account_store.update_account(updated).await?;

        Ok(generated)
    }
}
