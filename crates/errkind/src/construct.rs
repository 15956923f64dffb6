//! Constructors for common error shapes.
//!
//! Messages passed to the public constructors must not contain
//! implementation details, as they may be shown to a requesting client.
//! Attaching fields to a public error with [`ErrorExt::with`] returns a new
//! error that is not public; its cause still is.

use crate::chain::{self, BoxError};
use crate::status::{BAD_REQUEST, FORBIDDEN, NOT_FOUND, NOT_IMPLEMENTED};
use crate::{ErrorExt, PublicStatusCodeError, PublicStatusError, TemporaryError};
use std::panic::Location;

/// A public error with a message and status.
pub fn public(message: impl Into<String>, status: i32) -> BoxError {
    Box::new(PublicStatusError::new(message, status))
}

/// A public error with a message, status and code.
///
/// The code is trimmed. A blank code is dropped entirely and the result is
/// the same as [`public`].
pub fn public_with_code(message: impl Into<String>, status: i32, code: &str) -> BoxError {
    let code = code.trim();
    if code.is_empty() {
        return public(message, status);
    }
    Box::new(PublicStatusCodeError::new(message, status, code))
}

/// A temporary error, already wrapped so fields can be attached in place.
pub fn temporary(message: impl Into<String>) -> chain::Error {
    chain::Error::wrap(TemporaryError::new(message))
}

/// Build a message from caller-supplied fragments.
///
/// Fragments are trimmed and blank ones dropped. The survivors are joined
/// with a single space; if none survive, `default` is returned.
pub fn make_message(default: &str, msgs: &[&str]) -> String {
    let messages: Vec<&str> = msgs
        .iter()
        .map(|msg| msg.trim())
        .filter(|msg| !msg.is_empty())
        .collect();
    if messages.is_empty() {
        return default.to_string();
    }
    messages.join(" ")
}

/// A public error with status 400.
pub fn bad_request(msg: &[&str]) -> BoxError {
    public(make_message("bad request", msg), BAD_REQUEST)
}

/// A public error with status 403.
pub fn forbidden(msg: &[&str]) -> BoxError {
    public(make_message("forbidden", msg), FORBIDDEN)
}

/// A public error with status 404.
pub fn not_found(msg: &[&str]) -> BoxError {
    public(make_message("not found", msg), NOT_FOUND)
}

/// An error with status 501, recording the caller's location in a
/// `caller` field.
///
/// Because of the field the returned error is not itself public; its cause
/// is.
#[track_caller]
pub fn not_implemented(msg: &[&str]) -> chain::Error {
    let caller = Location::caller();
    PublicStatusError::new(make_message("not implemented", msg), NOT_IMPLEMENTED)
        .with("caller", caller)
}
