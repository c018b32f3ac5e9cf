pub mod use_cases;

pub use use_cases::{
    authenticate::{AuthenticateError, AuthenticateUseCase},
    change_email::{ChangeEmailError, ChangeEmailUseCase},
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    request_temporary_account::RequestTemporaryAccountUseCase,
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
};
