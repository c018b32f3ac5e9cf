pub mod account_confirmation;
pub mod temporary_account_creation_result;
pub mod token_verification;
