use gatekeep_core::SubjectId;

use crate::wire::{codec::WireCodec, error::MappingError};

/// Subject ids travel as plain decimal integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectIdCodec;

impl WireCodec for SubjectIdCodec {
    type Value = SubjectId;

    fn encode(&self, value: &SubjectId) -> String {
        value.value().to_string()
    }

    fn decode(&self, input: &str) -> Result<SubjectId, MappingError> {
        input
            .parse::<i64>()
            .map(SubjectId::new)
            .map_err(|_| MappingError::invalid_value(input, "subject id"))
    }
}

/// Booleans travel as `1` / `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanCodec;

impl WireCodec for BooleanCodec {
    type Value = bool;

    fn encode(&self, value: &bool) -> String {
        let encoded = if *value { "1" } else { "0" };
        encoded.to_owned()
    }

    fn decode(&self, input: &str) -> Result<bool, MappingError> {
        match input {
            "1" => Ok(true),
            "0" => Ok(false),
            _ => Err(MappingError::invalid_value(input, "boolean")),
        }
    }
}
