use gatekeep_core::{Token, TokenStatus, TokenVerification};

use crate::wire::{
    codec::{WireCodec, split_fields},
    error::MappingError,
    scalar::{BooleanCodec, SubjectIdCodec},
    separator::FIELD_SEPARATOR,
};

/// `subjectId @_@ authenticated`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenVerificationCodec;

impl WireCodec for TokenVerificationCodec {
    type Value = TokenVerification;

    fn encode(&self, verification: &TokenVerification) -> String {
        format!(
            "{}{FIELD_SEPARATOR}{}",
            SubjectIdCodec.encode(&verification.subject_id()),
            BooleanCodec.encode(&verification.authenticated())
        )
    }

    fn decode(&self, input: &str) -> Result<TokenVerification, MappingError> {
        let [subject_id, authenticated] = split_fields(input, FIELD_SEPARATOR)?;
        let subject_id = SubjectIdCodec
            .decode(subject_id)
            .map_err(|e| e.in_field(input, 0))?;
        let authenticated = BooleanCodec
            .decode(authenticated)
            .map_err(|e| e.in_field(input, 1))?;
        Ok(TokenVerification::new(subject_id, authenticated))
    }
}

/// `subjectId @_@ key @_@ status`
///
/// The authentication time is not transmitted; decoded tokens carry 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCodec;

impl WireCodec for TokenCodec {
    type Value = Token;

    fn encode(&self, token: &Token) -> String {
        format!(
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            SubjectIdCodec.encode(&token.subject_id()),
            token.key(),
            token.status().value()
        )
    }

    fn decode(&self, input: &str) -> Result<Token, MappingError> {
        let [subject_id, key, status] = split_fields(input, FIELD_SEPARATOR)?;
        let subject_id = SubjectIdCodec
            .decode(subject_id)
            .map_err(|e| e.in_field(input, 0))?;
        let key = key
            .parse::<i32>()
            .map_err(|_| MappingError::invalid_value(key, "token key").in_field(input, 1))?;
        let status = status
            .parse::<i32>()
            .ok()
            .and_then(|value| TokenStatus::try_from(value).ok())
            .ok_or_else(|| MappingError::invalid_value(status, "token status").in_field(input, 2))?;
        Ok(Token::any(subject_id, key, status))
    }
}
