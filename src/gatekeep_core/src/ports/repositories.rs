use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{account::Account, subject_id::SubjectId};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError>;
    /// Replaces the stored account with the same id.
    async fn update_account(&self, account: Account) -> Result<(), AccountStoreError>;
    async fn get_account(&self, login: &str) -> Result<Account, AccountStoreError>;
    async fn login_exists(&self, login: &str) -> Result<bool, AccountStoreError>;
    async fn email_exists(&self, email: &str) -> Result<bool, AccountStoreError>;
    async fn is_banned(&self, id: SubjectId) -> Result<bool, AccountStoreError>;
}
