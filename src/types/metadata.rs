//! Restricted metadata values attached to an [`Error`](crate::Error).

use core::fmt;

use crate::types::alloc_type::{BTreeMap, String};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata map carried by an error. Ordered so equality and hashing are deterministic.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A single metadata value: a string, an integer or a boolean.
///
/// # Examples
///
/// ```
/// use error_or::MetadataValue;
///
/// assert_eq!(MetadataValue::from(3), MetadataValue::Int(3));
/// assert_eq!(MetadataValue::from("id"), MetadataValue::String("id".into()));
/// assert_eq!(MetadataValue::from(true).as_bool(), Some(true));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl MetadataValue {
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::Int(n) => fmt::Display::fmt(n, f),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for MetadataValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for MetadataValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for MetadataValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

macro_rules! metadata_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MetadataValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

metadata_from_int!(i8, i16, i32, i64, u8, u16, u32);
