//! The structured error value carried by [`ErrorOr`](crate::ErrorOr).
//!
//! An [`Error`] is an immutable value object: a caller-defined `code`, a human
//! readable `description`, an [`ErrorType`] category and optional
//! [`Metadata`]. Builder methods consume the error and return a new one.

use core::fmt;

use crate::types::alloc_type::{Cow, String};
use crate::types::contract::ContractViolation;
use crate::types::error_type::ErrorType;
use crate::types::metadata::{Metadata, MetadataValue};

/// One error occurrence.
///
/// Two errors are equal when their code, description, category and metadata
/// content are equal.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorType};
///
/// let err = Error::not_found("User.NotFound", "User 42 does not exist")
///     .with_metadata("user_id", 42);
///
/// assert_eq!(err.code(), "User.NotFound");
/// assert_eq!(err.error_type(), ErrorType::NOT_FOUND);
/// assert_eq!(err.numeric_type(), 4);
/// assert_eq!(err.metadata_value("user_id").and_then(|v| v.as_i64()), Some(42));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    pub(crate) code: Cow<'static, str>,
    pub(crate) description: Cow<'static, str>,
    pub(crate) error_type: ErrorType,
    pub(crate) metadata: Metadata,
}

macro_rules! category_constructors {
    ($($(#[$doc:meta])* $name:ident => $ty:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(
                code: impl Into<Cow<'static, str>>,
                description: impl Into<Cow<'static, str>>,
            ) -> Self {
                Self::new(ErrorType::$ty, code, description)
            }
        )*
    };
}

impl Error {
    /// Creates an error of any category.
    #[inline]
    pub fn new(
        error_type: ErrorType,
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            error_type,
            metadata: Metadata::new(),
        }
    }

    /// Creates an error of the given category with its default code and description.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorType};
    ///
    /// let err = Error::of(ErrorType::NOT_FOUND);
    /// assert_eq!(err.code(), "General.NotFound");
    /// assert_eq!(err.description(), "A 'Not Found' error has occurred.");
    /// ```
    #[inline]
    pub fn of(error_type: ErrorType) -> Self {
        Self::new(error_type, error_type.default_code(), error_type.default_description())
    }

    /// Creates an error with a caller-defined numeric category.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::Error;
    ///
    /// let err = Error::custom(42, "Payment.Declined", "Card was declined");
    /// assert_eq!(err.numeric_type(), 42);
    /// assert!(!err.error_type().is_builtin());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::NegativeErrorType`] when `numeric_type`
    /// is negative. Use [`try_custom`](Self::try_custom) to get the violation back.
    #[inline]
    #[track_caller]
    pub fn custom(
        numeric_type: i32,
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorType::from_i32(numeric_type), code, description)
    }

    /// Non-panicking [`custom`](Self::custom).
    #[inline]
    pub fn try_custom(
        numeric_type: i32,
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ContractViolation> {
        let error_type = ErrorType::try_from_i32(numeric_type)?;
        Ok(Self::new(error_type, code, description))
    }

    category_constructors! {
        /// Creates a [`ErrorType::FAILURE`] error.
        failure => FAILURE;
        /// Creates an [`ErrorType::UNEXPECTED`] error.
        unexpected => UNEXPECTED;
        /// Creates a [`ErrorType::VALIDATION`] error. The code usually names the offending field.
        validation => VALIDATION;
        /// Creates a [`ErrorType::CONFLICT`] error.
        conflict => CONFLICT;
        /// Creates a [`ErrorType::NOT_FOUND`] error.
        not_found => NOT_FOUND;
        /// Creates an [`ErrorType::UNAUTHORIZED`] error.
        unauthorized => UNAUTHORIZED;
        /// Creates a [`ErrorType::FORBIDDEN`] error.
        forbidden => FORBIDDEN;
        /// Creates a [`ErrorType::GONE`] error.
        gone => GONE;
        /// Creates a [`ErrorType::PRECONDITION_FAILED`] error.
        precondition_failed => PRECONDITION_FAILED;
        /// Creates an [`ErrorType::UNSUPPORTED_MEDIA_TYPE`] error.
        unsupported_media_type => UNSUPPORTED_MEDIA_TYPE;
        /// Creates an [`ErrorType::UNPROCESSABLE_ENTITY`] error.
        unprocessable_entity => UNPROCESSABLE_ENTITY;
        /// Creates an [`ErrorType::UNAVAILABLE_FOR_LEGAL_REASONS`] error.
        unavailable_for_legal_reasons => UNAVAILABLE_FOR_LEGAL_REASONS;
        /// Creates a [`ErrorType::BAD_GATEWAY`] error.
        bad_gateway => BAD_GATEWAY;
        /// Creates a [`ErrorType::SERVICE_UNAVAILABLE`] error.
        service_unavailable => SERVICE_UNAVAILABLE;
        /// Creates a [`ErrorType::GATEWAY_TIMEOUT`] error.
        gateway_timeout => GATEWAY_TIMEOUT;
    }

    /// Returns a copy with the code replaced.
    #[inline]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Returns a copy with the description replaced.
    #[inline]
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds (or overrides) a single metadata entry.
    #[inline]
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Merges a whole metadata map, overriding existing keys.
    #[inline]
    pub fn with_metadata_map(mut self, metadata: Metadata) -> Self {
        self.metadata.extend(metadata);
        self
    }

    /// Caller-defined identifier, e.g. `User.NotFound`.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The error category.
    #[inline]
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// The integer backing [`error_type`](Self::error_type); custom categories included.
    #[inline]
    pub fn numeric_type(&self) -> i32 {
        self.error_type.as_i32()
    }

    /// Returns the metadata map, or `None` when no entry was attached.
    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        if self.metadata.is_empty() {
            None
        } else {
            Some(&self.metadata)
        }
    }

    /// Looks up a single metadata entry.
    #[inline]
    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Returns `true` when the error belongs to `error_type`.
    #[inline]
    pub fn is_type(&self, error_type: ErrorType) -> bool {
        self.error_type == error_type
    }
}

impl Default for Error {
    #[inline]
    fn default() -> Self {
        Self::of(ErrorType::FAILURE)
    }
}

impl From<ErrorType> for Error {
    #[inline]
    fn from(error_type: ErrorType) -> Self {
        Self::of(error_type)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Error;
    use crate::types::alloc_type::String;
    use crate::types::error_type::ErrorType;
    use crate::types::metadata::Metadata;
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Error {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let has_metadata = !self.metadata.is_empty();
            let len = if has_metadata { 4 } else { 3 };
            let mut state = serializer.serialize_struct("Error", len)?;
            state.serialize_field("code", &self.code)?;
            state.serialize_field("description", &self.description)?;
            state.serialize_field("type", &self.error_type)?;
            if has_metadata {
                state.serialize_field("metadata", &self.metadata)?;
            } else {
                state.skip_field("metadata")?;
            }
            state.end()
        }
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct ErrorRepr {
        code: Option<String>,
        description: Option<String>,
        #[serde(rename = "type")]
        error_type: Option<ErrorType>,
        #[serde(default)]
        metadata: Option<Metadata>,
    }

    impl<'de> Deserialize<'de> for Error {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = ErrorRepr::deserialize(deserializer)?;

            let code = repr
                .code
                .filter(|code| !code.trim().is_empty())
                .ok_or_else(|| D::Error::custom("Expected value for code"))?;
            let description = repr
                .description
                .filter(|description| !description.trim().is_empty())
                .ok_or_else(|| D::Error::custom("Expected value for description"))?;
            let error_type =
                repr.error_type.ok_or_else(|| D::Error::custom("Expected value for type"))?;

            Ok(Error {
                code: code.into(),
                description: description.into(),
                error_type,
                metadata: repr.metadata.unwrap_or_default(),
            })
        }
    }
}
