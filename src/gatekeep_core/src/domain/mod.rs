pub mod account;
pub mod credential;
pub mod email;
pub mod password;
pub mod rules;
pub mod subject_id;
pub mod temporary_account;
pub mod token;
pub mod validation_error;
pub mod validator;
