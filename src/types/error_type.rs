//! Open error category.
//!
//! [`ErrorType`] wraps a plain `i32`. The built-in categories are exposed as
//! associated constants, and any other non-negative integer is a
//! caller-defined custom category that survives serialization unchanged.

use core::fmt;

use crate::types::contract::ContractViolation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category of an [`Error`](crate::Error).
///
/// # Examples
///
/// ```
/// use error_or::ErrorType;
///
/// assert_eq!(ErrorType::NOT_FOUND.as_i32(), 4);
/// assert!(ErrorType::NOT_FOUND.is_builtin());
///
/// let custom = ErrorType::from_i32(42);
/// assert!(!custom.is_builtin());
/// assert_eq!(custom.to_string(), "Custom(42)");
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorType(i32);

impl ErrorType {
    pub const FAILURE: Self = Self(0);
    pub const UNEXPECTED: Self = Self(1);
    pub const VALIDATION: Self = Self(2);
    pub const CONFLICT: Self = Self(3);
    pub const NOT_FOUND: Self = Self(4);
    pub const UNAUTHORIZED: Self = Self(5);
    pub const FORBIDDEN: Self = Self(6);
    pub const GONE: Self = Self(7);
    pub const PRECONDITION_FAILED: Self = Self(8);
    pub const UNSUPPORTED_MEDIA_TYPE: Self = Self(9);
    pub const UNPROCESSABLE_ENTITY: Self = Self(10);
    pub const UNAVAILABLE_FOR_LEGAL_REASONS: Self = Self(11);
    pub const BAD_GATEWAY: Self = Self(12);
    pub const SERVICE_UNAVAILABLE: Self = Self(13);
    pub const GATEWAY_TIMEOUT: Self = Self(14);

    /// Every built-in category, in numeric order.
    pub const BUILTIN: [Self; 15] = [
        Self::FAILURE,
        Self::UNEXPECTED,
        Self::VALIDATION,
        Self::CONFLICT,
        Self::NOT_FOUND,
        Self::UNAUTHORIZED,
        Self::FORBIDDEN,
        Self::GONE,
        Self::PRECONDITION_FAILED,
        Self::UNSUPPORTED_MEDIA_TYPE,
        Self::UNPROCESSABLE_ENTITY,
        Self::UNAVAILABLE_FOR_LEGAL_REASONS,
        Self::BAD_GATEWAY,
        Self::SERVICE_UNAVAILABLE,
        Self::GATEWAY_TIMEOUT,
    ];

    /// Wraps a non-negative integer, built-in or custom.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::NegativeErrorType`] when `value` is negative.
    #[inline]
    #[track_caller]
    pub fn from_i32(value: i32) -> Self {
        match Self::try_from_i32(value) {
            Ok(error_type) => error_type,
            Err(violation) => violation.raise(),
        }
    }

    /// Non-panicking [`from_i32`](Self::from_i32).
    #[inline]
    pub const fn try_from_i32(value: i32) -> Result<Self, ContractViolation> {
        if value < Self::FAILURE.0 {
            Err(ContractViolation::NegativeErrorType)
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the backing integer.
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns `true` for the fifteen named categories.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 >= Self::FAILURE.0 && self.0 <= Self::GATEWAY_TIMEOUT.0
    }

    /// Returns the category name, or `None` for custom categories.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            0 => "Failure",
            1 => "Unexpected",
            2 => "Validation",
            3 => "Conflict",
            4 => "NotFound",
            5 => "Unauthorized",
            6 => "Forbidden",
            7 => "Gone",
            8 => "PreconditionFailed",
            9 => "UnsupportedMediaType",
            10 => "UnprocessableEntity",
            11 => "UnavailableForLegalReasons",
            12 => "BadGateway",
            13 => "ServiceUnavailable",
            14 => "GatewayTimeout",
            _ => return None,
        })
    }

    /// Code used by [`Error::of`](crate::Error::of) when none is supplied.
    pub const fn default_code(self) -> &'static str {
        match self.0 {
            0 => "General.Failure",
            1 => "General.Unexpected",
            2 => "General.Validation",
            3 => "General.Conflict",
            4 => "General.NotFound",
            5 => "General.Unauthorized",
            6 => "General.Forbidden",
            7 => "General.Gone",
            8 => "General.PreconditionFailed",
            9 => "General.UnsupportedMediaType",
            10 => "General.UnprocessableEntity",
            11 => "General.UnavailableForLegalReasons",
            12 => "General.BadGateway",
            13 => "General.ServiceUnavailable",
            14 => "General.GatewayTimeout",
            _ => "General.Custom",
        }
    }

    /// Description used by [`Error::of`](crate::Error::of) when none is supplied.
    pub const fn default_description(self) -> &'static str {
        match self.0 {
            0 => "A failure has occurred.",
            1 => "An unexpected error has occurred.",
            2 => "A validation error has occurred.",
            3 => "A conflict error has occurred.",
            4 => "A 'Not Found' error has occurred.",
            5 => "An 'Unauthorized' error has occurred.",
            6 => "A 'Forbidden' error has occurred.",
            7 => "A 'Gone' error has occurred.",
            8 => "A 'Precondition Failed' error has occurred.",
            9 => "An 'Unsupported Media Type' error has occurred.",
            10 => "An 'Unprocessable Entity' error has occurred.",
            11 => "An 'Unavailable For Legal Reasons' error has occurred.",
            12 => "A 'Bad Gateway' error has occurred.",
            13 => "A 'Service Unavailable' error has occurred.",
            14 => "A 'Gateway Timeout' error has occurred.",
            _ => "A custom error has occurred.",
        }
    }
}

impl Default for ErrorType {
    #[inline]
    fn default() -> Self {
        Self::FAILURE
    }
}

impl TryFrom<i32> for ErrorType {
    type Error = ContractViolation;

    #[inline]
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from_i32(value)
    }
}

impl From<ErrorType> for i32 {
    #[inline]
    fn from(value: ErrorType) -> Self {
        value.0
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Custom({})", self.0),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for ErrorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ErrorType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        Self::try_from_i32(value)
            .map_err(|_| serde::de::Error::custom("The specified error type is invalid"))
    }
}
