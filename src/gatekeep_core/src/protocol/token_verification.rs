use crate::domain::{subject_id::SubjectId, token::Token};

/// Answer to "is this subject currently authenticated?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenVerification {
    subject_id: SubjectId,
    authenticated: bool,
}

impl TokenVerification {
    pub fn new(subject_id: SubjectId, authenticated: bool) -> Self {
        Self {
            subject_id,
            authenticated,
        }
    }

    pub fn subject_id(&self) -> SubjectId {
        self.subject_id
    }

    pub fn authenticated(&self) -> bool {
        self.authenticated
    }
}

impl From<&Token> for TokenVerification {
    fn from(token: &Token) -> Self {
        Self::new(token.subject_id(), token.is_authenticated())
    }
}
