use std::fmt;

/// Identifier of the subject (player, user, service) a token speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(i64);

impl SubjectId {
    /// Sentinel used by tokens that do not describe a real session.
    pub const WORLD: SubjectId = SubjectId(0);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for SubjectId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
