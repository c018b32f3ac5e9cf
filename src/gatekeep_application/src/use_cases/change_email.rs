use gatekeep_core::{AccountStore, AccountStoreError, ValidationErrors};

/// Error types for change email use case
#[derive(Debug, thiserror::Error)]
pub enum ChangeEmailError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error(transparent)]
    InvalidEmail(#[from] ValidationErrors),
}

/// Change email use case - validates and stores a new email address
pub struct ChangeEmailUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> ChangeEmailUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    #[tracing::instrument(name = "ChangeEmailUseCase::execute", skip(self, new_email))]
    pub async fn execute(&self, login: &str, new_email: &str) -> Result<(), ChangeEmailError> {
        let account = self.account_store.get_account(login).await?;
        let updated = account.change_email(new_email)?;
        if account.email() != new_email && self.account_store.email_exists(new_email).await? {
            return Err(AccountStoreError::AccountAlreadyExists.into());
        }
        self.account_store.update_account(updated).await?;

        Ok(())
    }
}
