use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use gatekeep_core::{Account, AccountStore, AccountStoreError, SubjectId};

/// In-memory account store keyed by subject id.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<SubjectId, Account>>>,
    banned: Arc<RwLock<HashSet<SubjectId>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn ban(&self, id: SubjectId) {
        self.banned.write().await.insert(id);
    }

    pub async fn unban(&self, id: SubjectId) {
        self.banned.write().await.remove(&id);
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let taken = accounts.contains_key(&account.id())
            || accounts
                .values()
                .any(|a| a.login() == account.login() || a.email() == account.email());
        if taken {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        accounts.insert(account.id(), account);
        Ok(())
    }

    async fn update_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(&account.id())
            .ok_or(AccountStoreError::AccountNotFound)?;
        *stored = account;
        Ok(())
    }

    async fn get_account(&self, login: &str) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|account| account.login() == login)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn login_exists(&self, login: &str) -> Result<bool, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|account| account.login() == login))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|account| account.email() == email))
    }

    async fn is_banned(&self, id: SubjectId) -> Result<bool, AccountStoreError> {
        Ok(self.banned.read().await.contains(&id))
    }
}
