use gatekeep_core::TemporaryAccountRequest;
use secrecy::ExposeSecret;

use crate::wire::{
    codec::{WireCodec, split_fields},
    error::MappingError,
    separator::OBJECT_SEPARATOR,
};

/// `login #_# password #_# email #_# language`
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporaryAccountCodec;

impl WireCodec for TemporaryAccountCodec {
    type Value = TemporaryAccountRequest;

    fn encode(&self, request: &TemporaryAccountRequest) -> String {
        [
            request.login(),
            request.password().expose_secret(),
            request.email(),
            request.language(),
        ]
        .join(OBJECT_SEPARATOR)
    }

    fn decode(&self, input: &str) -> Result<TemporaryAccountRequest, MappingError> {
        let [login, password, email, language] = split_fields(input, OBJECT_SEPARATOR)?;
        Ok(TemporaryAccountRequest::unchecked(
            login, password, email, language,
        ))
    }
}
