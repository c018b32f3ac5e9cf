use gatekeep_core::AccountConfirmation;

use crate::wire::{
    codec::{WireCodec, split_fields},
    error::MappingError,
    separator::OBJECT_SEPARATOR,
};

/// `login #_# token`
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountConfirmationCodec;

impl WireCodec for AccountConfirmationCodec {
    type Value = AccountConfirmation;

    fn encode(&self, confirmation: &AccountConfirmation) -> String {
        format!(
            "{}{OBJECT_SEPARATOR}{}",
            confirmation.login(),
            confirmation.token()
        )
    }

    fn decode(&self, input: &str) -> Result<AccountConfirmation, MappingError> {
        let [login, token] = split_fields(input, OBJECT_SEPARATOR)?;
        Ok(AccountConfirmation::new(login, token))
    }
}
