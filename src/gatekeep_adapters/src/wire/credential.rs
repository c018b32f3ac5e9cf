use gatekeep_core::Credential;
use secrecy::ExposeSecret;

use crate::wire::{
    codec::{WireCodec, split_fields},
    error::MappingError,
    separator::FIELD_SEPARATOR,
};

/// `login @_@ password`
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialCodec;

impl WireCodec for CredentialCodec {
    type Value = Credential;

    fn encode(&self, credential: &Credential) -> String {
        format!(
            "{}{FIELD_SEPARATOR}{}",
            credential.login(),
            credential.password().expose_secret()
        )
    }

    fn decode(&self, input: &str) -> Result<Credential, MappingError> {
        let [login, password] = split_fields(input, FIELD_SEPARATOR)?;
        Ok(Credential::unchecked(login, password))
    }
}
