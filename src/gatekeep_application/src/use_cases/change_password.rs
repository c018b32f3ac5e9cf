use gatekeep_core::{
    AccountStore, AccountStoreError, AccountUpdateError, PasswordHasher, Validator,
};
use secrecy::Secret;

/// Error types for change password use case
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error(transparent)]
    Rejected(#[from] AccountUpdateError),
}

/// Change password use case - validates, hashes and stores a new password
pub struct ChangePasswordUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    account_store: &'a S,
    hasher: &'a H,
    validator: &'a Validator,
}

impl<'a, S, H> ChangePasswordUseCase<'a, S, H>
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

    /// Execute the change password use case
    ///
    /// # Arguments
    /// * `login` - Login of the account to update
    /// * `new_password` - The new clear-text password
    #[tracing::instrument(name = "ChangePasswordUseCase::execute", skip(self, new_password))]
    pub async fn execute(
        &self,
        login: &str,
        new_password: Secret<String>,
    ) -> Result<(), ChangePasswordError> {
        let account = self.account_store.get_account(login).await?;
        let updated = account.change_password(&new_password, self.validator, self.hasher)?;
        self.account_store.update_account(updated).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{PlainHasher, TestAccountStore, account};
    use gatekeep_core::{HashedPassword, ValidationError};

    #[tokio::test]
    async fn test_change_password_success() {
        let store = TestAccountStore::with(account("validLogin", "old@example.com"));
        let validator = Validator::default();
        let use_case = ChangePasswordUseCase::new(&store, &PlainHasher, &validator);

        let result = use_case
            .execute("validLogin", Secret::new("newPass1".to_owned()))
            .await;
        assert!(result.is_ok());

        // Verify password was changed
        let stored = store.get_account("validLogin").await.unwrap();
        assert_eq!(stored.password(), &HashedPassword::from("newPass1".to_owned()));
    }

    #[tokio::test]
    async fn test_change_password_invalid_password() {
        let store = TestAccountStore::with(account("validLogin", "old@example.com"));
        let validator = Validator::default();
        let use_case = ChangePasswordUseCase::new(&store, &PlainHasher, &validator);

        let result = use_case
            .execute("validLogin", Secret::new("no".to_owned()))
            .await;
        match result {
            Err(ChangePasswordError::Rejected(AccountUpdateError::Validation(errors))) => {
                assert_eq!(errors.first(), ValidationError::PassTooShort);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_change_password_account_not_found() {
        let store = TestAccountStore::default();
        let validator = Validator::default();
        let use_case = ChangePasswordUseCase::new(&store, &PlainHasher, &validator);

        let result = use_case
            .execute("validLogin", Secret::new("newPass1".to_owned()))
            .await;
        assert!(matches!(
            result,
            Err(ChangePasswordError::AccountStoreError(
                AccountStoreError::AccountNotFound
            ))
        ));
    }
}
