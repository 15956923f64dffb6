//! Error kinds detected through capabilities.
//!
//! This crate classifies errors without a monolithic error type. An error
//! value may implement any number of small, single-method *capability*
//! traits, and downstream code asks about those capabilities without knowing
//! the concrete type.
//!
//! # Capabilities
//!
//! | Trait            | Method          | Meaning                                   |
//! |------------------|-----------------|-------------------------------------------|
//! | [`Temporary`]    | `temporary()`   | the operation may succeed if retried      |
//! | [`Coder`]        | `code()`        | application-specific string code          |
//! | [`StatusCoder`]  | `status_code()` | numeric status, usually HTTP              |
//! | [`Statuser`]     | `status()`      | alternate numeric status accessor         |
//! | [`Publicer`]     | `public()`      | message is safe to show to a client       |
//! | [`Causer`]       | `cause()`       | the error wraps an inner error            |
//!
//! An error advertises the capabilities it has through [`Capabilities`].
//! Third-party types opt in with the [`capabilities!`] macro, no
//! registration needed:
//!
//! ```
//! use errkind::{capabilities, Temporary};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("connection reset")]
//! struct Reset;
//!
//! impl Temporary for Reset {
//!     fn temporary(&self) -> bool {
//!         true
//!     }
//! }
//!
//! capabilities!(Reset: Temporary);
//!
//! assert!(errkind::is_temporary(&Reset));
//! ```
//!
//! # Queries
//!
//! [`has_code`], [`code`], [`has_status`], [`status`] and [`is_temporary`]
//! first resolve the error to its innermost cause, so context added on the
//! way up never hides a capability. [`is_public`] is the exception: it tests
//! the exact value it is given. Attaching context to a public error produces
//! a new error that is no longer public, because the context may carry
//! implementation details. Resolve the cause first if the original message
//! is what the client should see:
//!
//! ```
//! use errkind::ErrorExt;
//!
//! let err = errkind::bad_request(&["missing name"]).with("field", "name");
//! assert!(!errkind::is_public(&err));
//! assert!(errkind::is_public(&errkind::cause(&err)));
//! assert_eq!(errkind::status(&err), 400);
//! ```
//!
//! # Constructors
//!
//! - [`public`], [`public_with_code`]: client-safe errors with a status
//! - [`bad_request`], [`forbidden`], [`not_found`], [`not_implemented`]
//! - [`temporary`]: an error that reports itself as retryable
//!
//! The cause chain itself lives in [`chain`]: [`chain::wrap`] adds context,
//! [`chain::Error::with`] attaches key/value fields and [`cause`] walks back
//! to the original error.

mod capability;
pub mod chain;
mod construct;
mod query;
pub mod status;
mod variant;

pub use capability::{
    AsCapabilities, Capabilities, Causer, Coder, Publicer, StatusCoder, Statuser, Temporary,
};
pub use chain::{BoxError, ErrorExt, cause};
pub use construct::{
    bad_request, forbidden, make_message, not_found, not_implemented, public, public_with_code,
    temporary,
};
pub use query::{code, has_code, has_status, is_public, is_temporary, status};
pub use variant::{PublicStatusCodeError, PublicStatusError, TemporaryError};
