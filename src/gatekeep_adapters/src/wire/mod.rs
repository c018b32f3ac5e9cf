pub mod account_confirmation;
pub mod codec;
pub mod credential;
pub mod error;
pub mod scalar;
pub mod separator;
pub mod temporary_account;
pub mod token;

pub use account_confirmation::AccountConfirmationCodec;
pub use codec::WireCodec;
pub use credential::CredentialCodec;
pub use error::MappingError;
pub use scalar::{BooleanCodec, SubjectIdCodec};
pub use separator::{FIELD_SEPARATOR, OBJECT_SEPARATOR};
pub use temporary_account::TemporaryAccountCodec;
pub use token::{TokenCodec, TokenVerificationCodec};
