use gatekeep_core::{
    AccountStore, TemporaryAccountCreationResult, TemporaryAccountRequest, Validator,
};

/// Request temporary account use case - validates a sign-up and checks that
/// neither the login nor the email is already taken
pub struct RequestTemporaryAccountUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
    validator: &'a Validator,
}

impl<'a, S> RequestTemporaryAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S, validator: &'a Validator) -> Self {
        Self {
            account_store,
            validator,
        }
    }

    /// Execute the request temporary account use case
    ///
    /// # Returns
    /// The validated request, or the flag set describing every problem found
    #[tracing::instrument(
        name = "RequestTemporaryAccountUseCase::execute",
        skip(self, password, email)
    )]
    pub async fn execute(
        &self,
        login: Option<&str>,
        password: Option<&str>,
        email: Option<&str>,
        language: &str,
    ) -> Result<TemporaryAccountRequest, TemporaryAccountCreationResult> {
        let request =
            TemporaryAccountRequest::create(self.validator, login, password, email, language)
                .map_err(|errors| {
                    tracing::debug!(codes = ?errors.codes(), "Rejected temporary account");
                    TemporaryAccountCreationResult::from(&errors)
                })?;

        let login_taken = self.account_store.login_exists(request.login());
        let email_taken = self.account_store.email_exists(request.email());
        let (login_taken, email_taken) = match tokio::try_join!(login_taken, email_taken) {
            Ok(taken) => taken,
            Err(e) => {
                tracing::error!(error = %e, "Could not check existing accounts");
                return Err(TemporaryAccountCreationResult::technical_issue());
            }
        };

        let result = TemporaryAccountCreationResult {
            account_existing: login_taken,
            email_existing: email_taken,
            ..TemporaryAccountCreationResult::success()
        };
        if result.has_error() {
            return Err(result);
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatekeep_core::{Account, AccountStoreError, HashedPassword, SubjectId};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Clone, Default)]
    struct MockAccountStore {
        accounts: Arc<RwLock<HashMap<String, Account>>>,
        broken: bool,
    }

    #[async_trait::async_trait]
    impl AccountStore for MockAccountStore {
        async fn add_account(&self, account: Account) -> Result<(), AccountStoreError> {
            let mut accounts = self.accounts.write().await;
            accounts.insert(account.login().to_owned(), account);
            Ok(())
        }

        async fn update_account(&self, _account: Account) -> Result<(), AccountStoreError> {
            unimplemented!()
        }

        async fn get_account(&self, _login: &str) -> Result<Account, AccountStoreError> {
            unimplemented!()
        }

        async fn login_exists(&self, login: &str) -> Result<bool, AccountStoreError> {
            if self.broken {
                return Err(AccountStoreError::UnexpectedError("down".to_owned()));
            }
            Ok(self.accounts.read().await.contains_key(login))
        }

        async fn email_exists(&self, email: &str) -> Result<bool, AccountStoreError> {
            let accounts = self.accounts.read().await;
            Ok(accounts.values().any(|account| account.email() == email))
        }

        async fn is_banned(&self, _id: SubjectId) -> Result<bool, AccountStoreError> {
            unimplemented!()
        }
    }

    async fn store_with_account() -> MockAccountStore {
        let store = MockAccountStore::default();
        store
            .add_account(Account::new(
                SubjectId::new(1),
                "takenLogin",
                HashedPassword::from("hash".to_owned()),
                "taken@example.com",
                0,
            ))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_request_success() {
        let store = store_with_account().await;
        let validator = Validator::default();
        let use_case = RequestTemporaryAccountUseCase::new(&store, &validator);

        let request = use_case
            .execute(Some("newLogin"), Some("validPass1"), Some("new@example.com"), "fr")
            .await
            .unwrap();
        assert_eq!(request.login(), "newLogin");
        assert_eq!(request.language(), "fr");
    }

    #[tokio::test]
    async fn test_request_invalid_input() {
        let store = store_with_account().await;
        let validator = Validator::default();
        let use_case = RequestTemporaryAccountUseCase::new(&store, &validator);

        let result = use_case.execute(None, None, None, "en").await.unwrap_err();
        assert!(result.invalid_login);
        assert!(result.invalid_password);
        assert!(result.email_missing);
        assert!(!result.account_existing);
    }

    #[tokio::test]
    async fn test_request_existing_login_and_email() {
        let store = store_with_account().await;
        let validator = Validator::default();
        let use_case = RequestTemporaryAccountUseCase::new(&store, &validator);

        let result = use_case
            .execute(
                Some("takenLogin"),
                Some("validPass1"),
                Some("taken@example.com"),
                "en",
            )
            .await
            .unwrap_err();
        assert!(result.account_existing);
        assert!(result.email_existing);
        assert!(!result.technical_issue);
    }

    #[tokio::test]
    async fn test_request_store_failure() {
        let store = MockAccountStore {
            broken: true,
            ..Default::default()
        };
        let validator = Validator::default();
        let use_case = RequestTemporaryAccountUseCase::new(&store, &validator);

        let result = use_case
            .execute(Some("newLogin"), Some("validPass1"), Some("new@example.com"), "en")
            .await
            .unwrap_err();
        assert_eq!(result, TemporaryAccountCreationResult::technical_issue());
    }
}
