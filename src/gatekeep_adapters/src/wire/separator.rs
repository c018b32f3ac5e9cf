/// Separates the sub-fields of a compact entity (credential, token).
pub const FIELD_SEPARATOR: &str = " @_@ ";

/// Separates the top-level fields of a request object.
pub const OBJECT_SEPARATOR: &str = " #_# ";

// Both separators carry an unescaped space, which no valid email contains and
// the default login and password rules reject.
