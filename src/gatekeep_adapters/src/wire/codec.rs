use crate::wire::error::MappingError;

/// Pairwise string encoder/decoder for one value type.
pub trait WireCodec {
    type Value;

    fn encode(&self, value: &Self::Value) -> String;

    fn decode(&self, input: &str) -> Result<Self::Value, MappingError>;
}

/// Splits `input` into exactly `N` positional fields.
///
/// Empty fields are kept. Parts beyond `N` are tolerated only when they are
/// all empty (a truncated trailer); any other surplus is a field count error.
pub(crate) fn split_fields<'a, const N: usize>(
    input: &'a str,
    separator: &str,
) -> Result<[&'a str; N], MappingError> {
    let field_count = |found| MappingError::FieldCount {
        input: input.to_owned(),
        expected: N,
        found,
    };

    let mut parts = input.split(separator);
    let mut fields = [""; N];
    for (found, field) in fields.iter_mut().enumerate() {
        *field = parts.next().ok_or_else(|| field_count(found))?;
    }

    let surplus: Vec<&str> = parts.collect();
    if surplus.iter().any(|part| !part.is_empty()) {
        return Err(field_count(N + surplus.len()));
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_field_count() {
        assert_eq!(split_fields::<2>("a,b", ","), Ok(["a", "b"]));
    }

    #[test]
    fn test_empty_fields_are_kept() {
        assert_eq!(split_fields::<3>(",b,", ","), Ok(["", "b", ""]));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            split_fields::<2>("ab", ","),
            Err(MappingError::FieldCount {
                input: "ab".to_owned(),
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_empty_trailing_parts_are_truncated() {
        assert_eq!(split_fields::<2>("a,b,,", ","), Ok(["a", "b"]));
    }

    #[test]
    fn test_non_empty_surplus_is_rejected() {
        assert!(matches!(
            split_fields::<2>("a,b,c", ","),
            Err(MappingError::FieldCount {
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_multi_character_separator() {
        assert_eq!(split_fields::<2>("a@_@b", "@_@"), Ok(["a", "b"]));
        assert!(split_fields::<2>("a@_b", "@_@").is_err());
    }
}
