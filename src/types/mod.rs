//! Core value types.
//!
//! This module provides [`Error`], its [`ErrorType`] category and
//! [`Metadata`], the non-empty [`ErrorList`], and the [`ErrorOr`] union
//! that carries either a value or that list through a pipeline.
//!
//! # Examples
//!
//! ```
//! use error_or::{Error, ErrorOr, ErrorType};
//!
//! let result: ErrorOr<u32> = Error::conflict("User.Duplicate", "Email already used")
//!     .with_metadata("email", "a@b.c")
//!     .into();
//!
//! assert_eq!(result.first_error().error_type(), ErrorType::CONFLICT);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod contract;
pub mod error;
pub mod error_list;
pub mod error_or;
pub mod error_type;
pub mod markers;
pub mod metadata;

pub use contract::ContractViolation;
pub use error::Error;
pub use error_list::ErrorList;
pub use error_or::ErrorOr;
pub use error_type::ErrorType;
pub use markers::{Created, Deleted, Success, Updated};
pub use metadata::{Metadata, MetadataValue};

/// SmallVec-backed collection used for storing errors.
///
/// Uses inline storage for a single element, which is the common case of
/// a pipeline failing on one error.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
