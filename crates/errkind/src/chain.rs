//! Cause chain: wrapping errors with context and walking back to the cause.
//!
//! A context [`Error`] holds an optional message, key/value fields and the
//! error it wraps. It implements [`Causer`] and nothing else, so wrapping an
//! error never adds or removes a capability from the cause, and never makes
//! the wrapper itself public.

use crate::{AsCapabilities, Capabilities, Causer};
use std::{fmt, ptr};

/// Type-erased error that keeps its capabilities inspectable.
pub type BoxError = Box<dyn Capabilities>;

/// An error with context, optionally wrapping a cause.
#[derive(Debug)]
pub struct Error {
    message: Option<String>,
    fields: Vec<(String, String)>,
    cause: Option<BoxError>,
}

impl Error {
    /// Create a new error with a message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: non_empty(message.into()),
            fields: Vec::new(),
            cause: None,
        }
    }

    /// Wrap an error without adding a message.
    ///
    /// Displays exactly as the cause until fields are attached.
    pub fn wrap(cause: impl ErrorExt) -> Self {
        Self {
            message: None,
            fields: Vec::new(),
            cause: Some(cause.into_box()),
        }
    }

    /// Attach a key/value field to this error.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Fields in the order they were attached.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The immediately wrapped error.
    pub fn inner(&self) -> Option<&dyn Capabilities> {
        self.cause.as_deref()
    }
}

/// Wrap `err` with a context message.
///
/// The result displays as `"{context}: {err}"`.
pub fn wrap(err: impl ErrorExt, context: impl Into<String>) -> Error {
    Error {
        message: non_empty(context.into()),
        fields: Vec::new(),
        cause: Some(err.into_box()),
    }
}

/// Resolve an error to its innermost cause.
///
/// Follows [`Causer`] links until an error without a cause is reached,
/// however long the chain. Returns `None` only when given `None`.
///
/// A hand-written [`Causer`] can link back into its own chain. The walk
/// then stops on a link inside the cycle instead of looping.
pub fn cause<E: AsCapabilities + ?Sized>(err: &E) -> Option<&dyn Capabilities> {
    let mut err = err.as_capabilities()?;
    // Brent's cycle detection: `mark` moves to the current link after
    // every power-of-two number of steps.
    let mut mark = err;
    let mut steps = 0usize;
    let mut limit = 1usize;
    while let Some(inner) = err.as_causer().and_then(|causer| causer.cause()) {
        if ptr::addr_eq(inner as *const dyn Capabilities, mark as *const dyn Capabilities) {
            break;
        }
        err = inner;
        steps += 1;
        if steps == limit {
            mark = err;
            steps = 0;
            limit = limit.saturating_mul(2);
        }
    }
    Some(err)
}

fn non_empty(message: String) -> Option<String> {
    if message.is_empty() { None } else { Some(message) }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(message) = &self.message {
            f.write_str(message)?;
            sep = " ";
        }
        for (key, value) in &self.fields {
            if needs_quotes(value) {
                write!(f, "{sep}{key}={value:?}")?;
            } else {
                write!(f, "{sep}{key}={value}")?;
            }
            sep = " ";
        }
        if let Some(cause) = &self.cause {
            if !sep.is_empty() {
                f.write_str(": ")?;
            }
            write!(f, "{cause}")?;
        }
        Ok(())
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '"' || c == '=')
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl Causer for Error {
    fn cause(&self) -> Option<&dyn Capabilities> {
        self.cause.as_deref()
    }
}

crate::capabilities!(Error: Causer);

/// Context attachment for any inspectable error.
///
/// Both methods return a new [`Error`] wrapping `self`. On
/// [`chain::Error`](Error) itself the inherent [`Error::with`] takes
/// precedence and adds the field in place.
pub trait ErrorExt: Sized {
    fn into_box(self) -> BoxError;

    /// Wrap with a context message.
    fn context(self, message: impl Into<String>) -> Error {
        wrap(self, message)
    }

    /// Wrap and attach a key/value field.
    fn with(self, key: impl Into<String>, value: impl fmt::Display) -> Error {
        Error::wrap(self).with(key, value)
    }
}

impl<E: Capabilities> ErrorExt for E {
    fn into_box(self) -> BoxError {
        Box::new(self)
    }
}

impl ErrorExt for BoxError {
    fn into_box(self) -> BoxError {
        self
    }
}
