//! Capability contracts.
//!
//! Each capability is a single-method trait. Whether a given error has a
//! capability is decided at runtime through the accessor methods of
//! [`Capabilities`].

use std::io;

/// Errors that know whether retrying the failed operation may succeed.
pub trait Temporary {
    fn temporary(&self) -> bool;
}

/// Errors that carry an application-specific string code.
pub trait Coder {
    fn code(&self) -> &str;
}

/// Errors that carry a numeric status, usually an HTTP status. Any `i32`
/// is accepted, including values outside the HTTP range.
pub trait StatusCoder {
    fn status_code(&self) -> i32;
}

/// Alternate accessor for a numeric status.
pub trait Statuser {
    fn status(&self) -> i32;
}

/// Errors whose message contains no implementation details and may be
/// returned to a requesting client.
pub trait Publicer {
    fn public(&self) -> bool;
}

/// Errors that wrap another error.
pub trait Causer {
    /// The immediately wrapped error, if there is one.
    fn cause(&self) -> Option<&dyn Capabilities>;
}

/// The set of capabilities an error implements.
///
/// Every accessor returns `None` unless the type overrides it, so an error
/// starts with no capabilities and opts in one at a time. The
/// [`capabilities!`](crate::capabilities) macro writes the overrides.
pub trait Capabilities: std::error::Error + Send + Sync + 'static {
    fn as_temporary(&self) -> Option<&dyn Temporary> {
        None
    }

    fn as_coder(&self) -> Option<&dyn Coder> {
        None
    }

    fn as_status_coder(&self) -> Option<&dyn StatusCoder> {
        None
    }

    fn as_statuser(&self) -> Option<&dyn Statuser> {
        None
    }

    fn as_publicer(&self) -> Option<&dyn Publicer> {
        None
    }

    fn as_causer(&self) -> Option<&dyn Causer> {
        None
    }
}

/// Implements [`Capabilities`] for a type, enabling the listed capability
/// traits. The type must already implement each trait it lists.
///
/// ```
/// use errkind::{capabilities, StatusCoder};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("upstream unavailable")]
/// struct Unavailable;
///
/// impl StatusCoder for Unavailable {
///     fn status_code(&self) -> i32 {
///         503
///     }
/// }
///
/// capabilities!(Unavailable: StatusCoder);
///
/// assert!(errkind::has_status(&Unavailable, &[502, 503]));
/// ```
///
/// A type listed without capabilities is still inspectable and simply has
/// none: `capabilities!(Plain);`.
#[macro_export]
macro_rules! capabilities {
    (@enable Temporary) => {
        fn as_temporary(&self) -> ::core::option::Option<&dyn $crate::Temporary> {
            ::core::option::Option::Some(self)
        }
    };
    (@enable Coder) => {
        fn as_coder(&self) -> ::core::option::Option<&dyn $crate::Coder> {
            ::core::option::Option::Some(self)
        }
    };
    (@enable StatusCoder) => {
        fn as_status_coder(&self) -> ::core::option::Option<&dyn $crate::StatusCoder> {
            ::core::option::Option::Some(self)
        }
    };
    (@enable Statuser) => {
        fn as_statuser(&self) -> ::core::option::Option<&dyn $crate::Statuser> {
            ::core::option::Option::Some(self)
        }
    };
    (@enable Publicer) => {
        fn as_publicer(&self) -> ::core::option::Option<&dyn $crate::Publicer> {
            ::core::option::Option::Some(self)
        }
    };
    (@enable Causer) => {
        fn as_causer(&self) -> ::core::option::Option<&dyn $crate::Causer> {
            ::core::option::Option::Some(self)
        }
    };
    ($ty:ty $(: $($cap:ident),+ $(,)?)?) => {
        impl $crate::Capabilities for $ty {
            $($($crate::capabilities!(@enable $cap);)+)?
        }
    };
}

/// Anything a query can inspect.
///
/// Implemented for every [`Capabilities`] type, for `dyn Capabilities` and
/// [`BoxError`](crate::BoxError), and for `Option<&T>` of those, where
/// `None` means "no error" and every query answers with its zero value.
pub trait AsCapabilities {
    fn as_capabilities(&self) -> Option<&dyn Capabilities>;
}

impl<E: Capabilities> AsCapabilities for E {
    fn as_capabilities(&self) -> Option<&dyn Capabilities> {
        Some(self)
    }
}

impl AsCapabilities for dyn Capabilities {
    fn as_capabilities(&self) -> Option<&dyn Capabilities> {
        Some(self)
    }
}

impl AsCapabilities for Box<dyn Capabilities> {
    fn as_capabilities(&self) -> Option<&dyn Capabilities> {
        Some(self.as_ref())
    }
}

impl<T: AsCapabilities + ?Sized> AsCapabilities for Option<&T> {
    fn as_capabilities(&self) -> Option<&dyn Capabilities> {
        self.and_then(|err| err.as_capabilities())
    }
}

// Interrupted, would-block and timed-out I/O is worth retrying.
impl Temporary for io::Error {
    fn temporary(&self) -> bool {
        matches!(
            self.kind(),
            io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
        )
    }
}

capabilities!(io::Error: Temporary);
