//! Async extensions for error-or.
//!
//! Two shapes of async pipeline are supported:
//!
//! - async steps on a resolved [`ErrorOr`](crate::ErrorOr): the inherent
//!   `*_async` methods (`then_async`, `map_async`, `fold_async`, ...);
//! - any step on a pending receiver: [`FutureErrorOrExt`] on every
//!   `Future<Output = ErrorOr<T>>`.
//!
//! Both keep the branching rules of the synchronous combinators; a step's
//! future is created and awaited only on the branch that selects it.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use error_or::prelude_async::*;
//!
//! async fn find_user(id: u32) -> ErrorOr<String> {
//!     if id == 1 {
//!         ErrorOr::ok("alice".to_string())
//!     } else {
//!         Error::not_found("User.NotFound", "No such user").into()
//!     }
//! }
//!
//! async fn load_avatar(name: String) -> ErrorOr<Vec<u8>> {
//!     ErrorOr::ok(name.into_bytes())
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let size = find_user(1)
//!     .then_async(load_avatar)
//!     .await
//!     .map(|bytes| bytes.len());
//! assert_eq!(size, ErrorOr::ok(5));
//!
//! let missing = find_user(2).then_async(load_avatar).await;
//! assert_eq!(missing.first_error().code(), "User.NotFound");
//! # }
//! ```

mod error_or_async;
mod future_ext;
mod sequence;

pub use future_ext::FutureErrorOrExt;
pub use sequence::Sequence;
