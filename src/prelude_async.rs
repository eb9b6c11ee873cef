//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! pending-receiver combinators.
//!
//! # Usage
//!
//! ```
//! use error_or::prelude_async::*;
//!
//! async fn load(id: u32) -> ErrorOr<u32> {
//!     ErrorOr::ok(id)
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let value = load(4).fail_if(|n| *n > 10, Error::validation("id", "too big")).await;
//! assert_eq!(value, ErrorOr::ok(4));
//! # }
//! ```
//!
//! # What's Included
//!
//! - everything in [`prelude`](crate::prelude)
//! - [`FutureErrorOrExt`](crate::async_ext::FutureErrorOrExt) and its
//!   [`Sequence`](crate::async_ext::Sequence) future

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{FutureErrorOrExt, Sequence};
