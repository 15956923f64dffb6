//! Concrete error shapes built by the constructors.
//!
//! Each type is an immutable value implementing one fixed combination of
//! capabilities.

use crate::{Coder, Publicer, StatusCoder, Statuser, Temporary, capabilities};
use thiserror::Error;

/// A client-safe error with a status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PublicStatusError {
    message: String,
    status: i32,
}

impl PublicStatusError {
    pub fn new(message: impl Into<String>, status: i32) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl StatusCoder for PublicStatusError {
    fn status_code(&self) -> i32 {
        self.status
    }
}

impl Statuser for PublicStatusError {
    fn status(&self) -> i32 {
        self.status
    }
}

impl Publicer for PublicStatusError {
    fn public(&self) -> bool {
        true
    }
}

capabilities!(PublicStatusError: StatusCoder, Statuser, Publicer);

/// A client-safe error with a status and a code.
///
/// Only built through [`public_with_code`](crate::public_with_code), which
/// guarantees the code is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PublicStatusCodeError {
    message: String,
    status: i32,
    code: String,
}

impl PublicStatusCodeError {
    pub(crate) fn new(message: impl Into<String>, status: i32, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            code: code.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl StatusCoder for PublicStatusCodeError {
    fn status_code(&self) -> i32 {
        self.status
    }
}

impl Statuser for PublicStatusCodeError {
    fn status(&self) -> i32 {
        self.status
    }
}

impl Coder for PublicStatusCodeError {
    fn code(&self) -> &str {
        &self.code
    }
}

impl Publicer for PublicStatusCodeError {
    fn public(&self) -> bool {
        true
    }
}

capabilities!(PublicStatusCodeError: StatusCoder, Statuser, Coder, Publicer);

/// An error that is always temporary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TemporaryError(String);

impl TemporaryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl Temporary for TemporaryError {
    fn temporary(&self) -> bool {
        true
    }
}

capabilities!(TemporaryError: Temporary);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Capabilities;

    #[test]
    fn test_public_status_error_capabilities() {
        let err = PublicStatusError::new("nope", 409);
        assert_eq!(err.to_string(), "nope");
        assert_eq!(err.as_status_coder().map(|s| s.status_code()), Some(409));
        assert_eq!(err.as_statuser().map(|s| s.status()), Some(409));
        assert!(err.as_publicer().is_some_and(|p| p.public()));
        assert!(err.as_coder().is_none());
        assert!(err.as_temporary().is_none());
    }

    #[test]
    fn test_public_status_code_error_capabilities() {
        let err = PublicStatusCodeError::new("taken", 409, "NameTaken");
        assert_eq!(err.message(), "taken");
        assert_eq!(err.as_coder().map(|c| c.code()), Some("NameTaken"));
        assert_eq!(err.as_status_coder().map(|s| s.status_code()), Some(409));
        assert!(err.as_publicer().is_some_and(|p| p.public()));
    }

    #[test]
    fn test_temporary_error_only_temporary() {
        let err = TemporaryError::new("busy");
        assert_eq!(err.to_string(), "busy");
        assert!(err.as_temporary().is_some_and(|t| t.temporary()));
        assert!(err.as_publicer().is_none());
        assert!(err.as_status_coder().is_none());
    }
}
