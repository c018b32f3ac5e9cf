use std::{
    fmt,
    hash::{Hash, Hasher},
};

use thiserror::Error;

use crate::domain::subject_id::SubjectId;

/// Key carried by tokens that do not describe a real session.
pub const NO_SESSION_KEY: i32 = -1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Time must be positive, value is {0}")]
    NegativeTime(i64),
    #[error("Unknown token status value {0}")]
    UnknownStatus(i32),
}

/// Outcome of an authentication attempt. The numeric values travel on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenStatus {
    Authenticated,
    NotAuthenticated,
    Banned,
    NotFound,
}

impl TokenStatus {
    pub const fn value(&self) -> i32 {
        match self {
            Self::Authenticated => 0,
            Self::NotAuthenticated => 1,
            Self::Banned => 2,
            Self::NotFound => 3,
        }
    }
}

impl TryFrom<i32> for TokenStatus {
    type Error = TokenError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Authenticated),
            1 => Ok(Self::NotAuthenticated),
            2 => Ok(Self::Banned),
            3 => Ok(Self::NotFound),
            other => Err(TokenError::UnknownStatus(other)),
        }
    }
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Authenticated => "AUTHENTICATED",
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::Banned => "BANNED",
            Self::NotFound => "NOT_FOUND",
        };
        f.write_str(name)
    }
}

/// Immutable snapshot of an authentication outcome.
///
/// Two tokens are equal when subject, key and status match; the
/// authentication time is informative only and ignored by `Eq` and `Hash`.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    subject_id: SubjectId,
    authentication_time: i64,
    key: i32,
    status: TokenStatus,
}

impl Token {
    fn new(
        subject_id: SubjectId,
        authentication_time: i64,
        key: i32,
        status: TokenStatus,
    ) -> Result<Self, TokenError> {
        if authentication_time < 0 {
            return Err(TokenError::NegativeTime(authentication_time));
        }
        Ok(Self {
            subject_id,
            authentication_time,
            key,
            status,
        })
    }

    const fn no_session(status: TokenStatus) -> Self {
        Self {
            subject_id: SubjectId::WORLD,
            authentication_time: 0,
            key: NO_SESSION_KEY,
            status,
        }
    }

    pub fn authenticated(
        subject_id: SubjectId,
        authentication_time: i64,
        key: i32,
    ) -> Result<Self, TokenError> {
        Self::new(subject_id, authentication_time, key, TokenStatus::Authenticated)
    }

    pub const fn authentication_failed() -> Self {
        Self::no_session(TokenStatus::NotAuthenticated)
    }

    pub const fn banned() -> Self {
        Self::no_session(TokenStatus::Banned)
    }

    pub const fn not_found() -> Self {
        Self::no_session(TokenStatus::NotFound)
    }

    /// Arbitrary combination with the time forced to 0, for decoders that
    /// have no trustworthy timestamp.
    pub const fn any(subject_id: SubjectId, key: i32, status: TokenStatus) -> Self {
        Self {
            subject_id,
            authentication_time: 0,
            key,
            status,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == TokenStatus::Authenticated
    }

    pub fn subject_id(&self) -> SubjectId {
        self.subject_id
    }

    pub fn authentication_time(&self) -> i64 {
        self.authentication_time
    }

    pub fn key(&self) -> i32 {
        self.key
    }

    pub fn status(&self) -> TokenStatus {
        self.status
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.subject_id == other.subject_id && self.key == other.key && self.status == other.status
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subject_id.hash(state);
        self.key.hash(state);
        self.status.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.subject_id, self.key, self.status, self.authentication_time
        )
    }
}
