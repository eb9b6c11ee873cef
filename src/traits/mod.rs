//! Conversion and extension traits.
//!
//! - [`IntoErrorOr`]: Conversion of error sources and results into [`ErrorOr`](crate::ErrorOr)
//! - [`ErrorOrState`]: Type-erased view of a result's error state
//! - [`ResultExt`] / [`OptionExt`]: Lifting foreign `Result` and `Option` values
//!
//! # Examples
//!
//! ```
//! use error_or::traits::{ErrorOrState, IntoErrorOr};
//! use error_or::{Error, ErrorOr};
//!
//! let result: ErrorOr<()> = vec![
//!     Error::validation("name", "Name is required"),
//!     Error::validation("age", "Age must be positive"),
//! ]
//! .into_error_or();
//!
//! let state: &dyn ErrorOrState = &result;
//! assert_eq!(state.errors_opt().map(|e| e.len()), Some(2));
//! ```

pub mod error_or_state;
pub mod into_error_or;
pub mod result_ext;

pub use error_or_state::ErrorOrState;
pub use into_error_or::IntoErrorOr;
pub use result_ext::{OptionExt, ResultExt};
