//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_or::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Error`], [`ErrorType`], [`ErrorList`], [`ErrorOr`], [`MetadataValue`]
//! - **Markers**: [`Success`], [`Created`], [`Updated`], [`Deleted`]
//! - **Traits**: [`IntoErrorOr`], [`ResultExt`], [`OptionExt`], [`ErrorOrState`]
//!
//! # Examples
//!
//! ```
//! use error_or::prelude::*;
//!
//! fn read_port(raw: Option<&str>) -> ErrorOr<u16> {
//!     raw.ok_or_error(Error::validation("Config.Port", "Port is missing"))
//!         .then(|s| s.parse::<u16>().into_error_or_with(|e| {
//!             Error::validation("Config.Port", e.to_string())
//!         }))
//! }
//!
//! assert_eq!(read_port(Some("8080")), ErrorOr::ok(8080));
//! assert!(read_port(None).is_error());
//! ```

// Core types
pub use crate::types::{
    Created, Deleted, Error, ErrorList, ErrorOr, ErrorType, MetadataValue, Success, Updated,
};

// Traits
pub use crate::traits::{ErrorOrState, IntoErrorOr, OptionExt, ResultExt};
