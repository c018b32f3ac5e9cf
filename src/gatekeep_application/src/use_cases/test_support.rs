use std::collections::HashMap;
use std::sync::Arc;

use gatekeep_core::{
    Account, AccountStore, AccountStoreError, HashedPassword, PasswordHashError, PasswordHasher,
    SubjectId,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

/// Stores the clear text as the "hash".
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, plaintext: &Secret<String>) -> Result<HashedPassword, PasswordHashError> {
        Ok(HashedPassword::from(plaintext.expose_secret().clone()))
    }

    fn verify(&self, plaintext: &Secret<String>, hash: &HashedPassword) -> bool {
        plaintext.expose_secret() == hash.as_ref().expose_secret()
    }
}

// Mock account store keyed by login
#[derive(Clone, Default)]
pub struct TestAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl TestAccountStore {
    pub fn with(account: Account) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(account.login().to_owned(), account);
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for TestAccountStore {
    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.login()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        accounts.insert(account.login().to_owned(), account);
        Ok(())
    }

    async fn update_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(account.login())
            .ok_or(AccountStoreError::AccountNotFound)?;
        *stored = account;
        Ok(())
    }

    async fn get_account(&self, login: &str) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(login)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn login_exists(&self, login: &str) -> Result<bool, AccountStoreError> {
        Ok(self.accounts.read().await.contains_key(login))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|account| account.email() == email))
    }

    async fn is_banned(&self, _id: SubjectId) -> Result<bool, AccountStoreError> {
        Ok(false)
    }
}

pub fn account(login: &str, email: &str) -> Account {
    Account::new(
        SubjectId::new(1),
        login,
        HashedPassword::from("validPass1".to_owned()),
        email,
        0,
    )
}
