use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("Expected {expected} fields in `{input}`, found {found}")]
    FieldCount {
        input: String,
        expected: usize,
        found: usize,
    },
    #[error("Invalid field {index} in `{input}`: {source}")]
    InvalidField {
        input: String,
        index: usize,
        #[source]
        source: Box<MappingError>,
    },
    #[error("`{value}` is not a valid {kind}")]
    InvalidValue { value: String, kind: &'static str },
}

impl MappingError {
    pub(crate) fn invalid_value(value: &str, kind: &'static str) -> Self {
        Self::InvalidValue {
            value: value.to_owned(),
            kind,
        }
    }

    pub(crate) fn in_field(self, input: &str, index: usize) -> Self {
        Self::InvalidField {
            input: input.to_owned(),
            index,
            source: Box::new(self),
        }
    }
}
