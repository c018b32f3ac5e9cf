pub mod domain;
pub mod ports;
pub mod protocol;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountUpdateError},
    credential::Credential,
    email::{check_email, is_valid_email},
    password::HashedPassword,
    rules::{AuthenticationRules, RulesError},
    subject_id::SubjectId,
    temporary_account::TemporaryAccountRequest,
    token::{Token, TokenError, TokenStatus},
    validation_error::{ValidationError, ValidationErrors},
    validator::Validator,
};

pub use ports::{
    password_hasher::{PasswordHashError, PasswordHasher},
    repositories::{AccountStore, AccountStoreError},
};

pub use protocol::{
    account_confirmation::AccountConfirmation,
    temporary_account_creation_result::TemporaryAccountCreationResult,
    token_verification::TokenVerification,
};
