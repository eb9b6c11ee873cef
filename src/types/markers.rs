//! Unit values for operations that succeed without producing data.
//!
//! ```
//! use error_or::{Deleted, Error, ErrorOr};
//!
//! fn delete_user(id: u64) -> ErrorOr<Deleted> {
//!     if id == 0 {
//!         return Error::not_found("User.NotFound", "No such user").into();
//!     }
//!     ErrorOr::ok(Deleted)
//! }
//!
//! assert!(delete_user(1).is_value());
//! assert!(delete_user(0).is_error());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! markers {
    ($($(#[$doc:meta])* $name:ident),*) => {
        $(
            $(#[$doc])*
            #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $name;
        )*
    };
}

markers! {
    /// Generic success.
    Success,
    /// A resource was created.
    Created,
    /// A resource was updated.
    Updated,
    /// A resource was deleted.
    Deleted
}
