//! Non-empty, ordered collection of [`Error`] values.

use core::ops::Deref;

use smallvec::smallvec;

use crate::types::alloc_type::Vec;
use crate::types::contract::ContractViolation;
use crate::types::error::Error;
use crate::types::ErrorVec;

/// The error payload of [`ErrorOr::Errors`](crate::ErrorOr::Errors).
///
/// Always holds at least one error, so [`first`](Self::first) never fails.
/// Backed by [`ErrorVec`], which keeps the common single-error case inline.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorList};
///
/// let mut errors = ErrorList::new(Error::validation("email", "Email is required"));
/// errors.push(Error::validation("password", "Too short"));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().code(), "email");
/// assert!(ErrorList::try_from_iter(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorList {
    items: ErrorVec<Error>,
}

impl ErrorList {
    /// Creates a list holding a single error.
    #[inline]
    pub fn new(first: Error) -> Self {
        Self { items: smallvec![first] }
    }

    /// Collects errors, failing when the iterator is empty.
    #[inline]
    pub fn try_from_iter<I>(errors: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Error>,
    {
        let items: ErrorVec<Error> = errors.into_iter().collect();
        if items.is_empty() {
            return Err(ContractViolation::EmptyErrors);
        }
        Ok(Self { items })
    }

    /// Collects errors.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyErrors`] when the iterator is empty.
    #[inline]
    #[track_caller]
    pub fn from_iter_or_panic<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        match Self::try_from_iter(errors) {
            Ok(list) => list,
            Err(violation) => violation.raise(),
        }
    }

    /// The representative error.
    #[inline]
    pub fn first(&self) -> &Error {
        &self.items[0]
    }

    /// Consumes the list, returning its representative error.
    #[inline]
    pub fn into_first(self) -> Error {
        let mut iter = self.items.into_iter();
        match iter.next() {
            Some(first) => first,
            None => ContractViolation::EmptyErrors.raise(),
        }
    }

    /// Appends an error at the end.
    #[inline]
    pub fn push(&mut self, error: Error) {
        self.items.push(error);
    }

    /// Number of errors; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the errors in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    /// The errors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.items
    }

    /// Returns the backing [`ErrorVec`].
    #[inline]
    pub fn into_inner(self) -> ErrorVec<Error> {
        self.items
    }

    /// Moves the errors into a `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<Error> {
        self.items.into_vec()
    }
}

impl Deref for ErrorList {
    type Target = [Error];

    #[inline]
    fn deref(&self) -> &[Error] {
        &self.items
    }
}

impl AsRef<[Error]> for ErrorList {
    #[inline]
    fn as_ref(&self) -> &[Error] {
        &self.items
    }
}

impl From<Error> for ErrorList {
    #[inline]
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

impl TryFrom<Vec<Error>> for ErrorList {
    type Error = ContractViolation;

    #[inline]
    fn try_from(errors: Vec<Error>) -> Result<Self, ContractViolation> {
        Self::try_from_iter(errors)
    }
}

impl TryFrom<ErrorVec<Error>> for ErrorList {
    type Error = ContractViolation;

    #[inline]
    fn try_from(items: ErrorVec<Error>) -> Result<Self, ContractViolation> {
        if items.is_empty() {
            return Err(ContractViolation::EmptyErrors);
        }
        Ok(Self { items })
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Extend<Error> for ErrorList {
    #[inline]
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::ErrorList;
    use crate::types::error::Error;
    use crate::types::ErrorVec;
    use serde::de::{Error as _, SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for ErrorList {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for error in self.iter() {
                seq.serialize_element(error)?;
            }
            seq.end()
        }
    }

    struct ErrorListVisitor;

    impl<'de> Visitor<'de> for ErrorListVisitor {
        type Value = ErrorList;

        fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("a non-empty sequence of errors")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ErrorList, A::Error> {
            let mut items = ErrorVec::new();
            while let Some(error) = seq.next_element::<Error>()? {
                items.push(error);
            }
            ErrorList::try_from(items).map_err(A::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for ErrorList {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(ErrorListVisitor)
        }
    }
}
