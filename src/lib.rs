//! A value, or a non-empty list of structured errors.
//!
//! `error_or` provides [`ErrorOr<T>`] together with a structured [`Error`]
//! (code, description, [`ErrorType`] category, optional [`Metadata`]) and a
//! fluent set of combinators for composing fallible steps without early
//! returns. Errors are ordinary values; nothing here is meant to be thrown.
//!
//! # Examples
//!
//! ## Chaining steps
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! fn parse(input: &str) -> ErrorOr<i32> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|_| Error::validation("Input.NotANumber", "Input must be a number"))
//!         .into()
//! }
//!
//! let rendered = ErrorOr::ok("21")
//!     .then(parse)
//!     .map(|n| n * 2)
//!     .fold(|n| n.to_string(), |errors| errors.first().code().to_string());
//!
//! assert_eq!(rendered, "42");
//! ```
//!
//! ## Recovering
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! let cached: ErrorOr<&str> = Error::not_found("Cache.Miss", "Not cached").into();
//! let value = cached.or_value("fallback");
//!
//! assert_eq!(value, ErrorOr::ok("fallback"));
//! ```
//!
//! ## Accumulating validation errors
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! let checks = [
//!     ErrorOr::ok(()),
//!     ErrorOr::from_error(Error::validation("email", "Email is required")),
//!     ErrorOr::from_error(Error::validation("password", "Too short")),
//! ];
//! let combined: ErrorOr<Vec<()>> = checks.into_iter().collect();
//!
//! assert_eq!(combined.errors().len(), 2);
//! ```
//!
//! ## Rendering errors at a boundary
//!
//! ```
//! use error_or::{problem, Error, ErrorType};
//!
//! let errors = [
//!     Error::validation("Email.Invalid", "bad email"),
//!     Error::conflict("User.Duplicate", "duplicate"),
//! ];
//!
//! assert_eq!(problem::leading_error_type(&errors, false), ErrorType::FAILURE);
//! assert_eq!(problem::leading_error_type(&errors, true), ErrorType::VALIDATION);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

/// Conversions between `ErrorOr`, `Result` and `Option`
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Boundary helpers for rendering errors as HTTP problem details
pub mod problem;
/// Conversion and extension traits
pub mod traits;
/// Error, ErrorType, ErrorList and ErrorOr
pub mod types;

/// Async combinators (requires `async` feature)
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod async_ext;

/// Async prelude - sync prelude plus async combinators (requires `async` feature)
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod prelude_async;

/// Structured logging of error states (requires `tracing` feature)
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    ContractViolation, Created, Deleted, Error, ErrorList, ErrorOr, ErrorType, ErrorVec, Metadata,
    MetadataValue, Success, Updated,
};
