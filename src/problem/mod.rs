//! Boundary helpers for rendering errors as HTTP problem details.
//!
//! Nothing here depends on a web framework. The module answers the
//! questions every HTTP adapter has to answer for an [`ErrorList`]:
//!
//! - which category leads a mixed list ([`leading_error_type`]);
//! - which status, title and type URI that category maps to ([`ProblemDefaults`]);
//! - how validation errors are grouped by field ([`group_by_code`]);
//! - what the RFC 9457 document looks like ([`ProblemDetails`]).
//!
//! # Examples
//!
//! ```
//! use error_or::problem::{ProblemDetails, ProblemErrors, ProblemOptions};
//! use error_or::{Error, ErrorList};
//!
//! let mut errors = ErrorList::new(Error::validation("email", "Email is required"));
//! errors.push(Error::validation("password", "Too short"));
//!
//! let problem = ProblemDetails::from_errors(&errors, &ProblemOptions::default());
//! assert_eq!(problem.status, 400);
//!
//! let ProblemErrors::Grouped(fields) = &problem.errors else { unreachable!() };
//! assert_eq!(fields["email"], vec!["Email is required".to_string()]);
//! assert_eq!(fields["password"], vec!["Too short".to_string()]);
//! ```

use core::fmt;

use crate::traits::ErrorOrState;
use crate::types::alloc_type::{BTreeMap, Box, Cow, String, Vec};
use crate::types::{ContractViolation, Error, ErrorList, ErrorType, Metadata};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Detail used for non-validation documents when none is configured.
pub const DEFAULT_DETAIL: &str = "See the errors property for more information.";

/// Picks the category that represents a whole error list.
///
/// - a single error, or `first_is_leading`: the first error's type;
/// - all errors share one type: that type;
/// - otherwise [`ErrorType::FAILURE`].
///
/// # Panics
///
/// Panics with [`ContractViolation::EmptyErrors`] when `errors` is empty.
///
/// # Examples
///
/// ```
/// use error_or::problem::leading_error_type;
/// use error_or::{Error, ErrorType};
///
/// let same = [Error::validation("a", "x"), Error::validation("b", "y")];
/// assert_eq!(leading_error_type(&same, false), ErrorType::VALIDATION);
///
/// let mixed = [Error::not_found("a", "x"), Error::conflict("b", "y")];
/// assert_eq!(leading_error_type(&mixed, false), ErrorType::FAILURE);
/// assert_eq!(leading_error_type(&mixed, true), ErrorType::NOT_FOUND);
/// ```
#[track_caller]
pub fn leading_error_type(errors: &[Error], first_is_leading: bool) -> ErrorType {
    let Some((first, rest)) = errors.split_first() else {
        ContractViolation::EmptyErrors.raise()
    };

    let first_type = first.error_type();
    if first_is_leading || rest.iter().all(|error| error.error_type() == first_type) {
        first_type
    } else {
        ErrorType::FAILURE
    }
}

/// Groups error descriptions by code, keeping input order within a code.
///
/// Codes act as field names, which is the shape validation responses use.
///
/// # Examples
///
/// ```
/// use error_or::problem::group_by_code;
/// use error_or::Error;
///
/// let grouped = group_by_code(&[
///     Error::validation("password", "Too short"),
///     Error::validation("password", "Needs a digit"),
/// ]);
/// assert_eq!(grouped["password"], vec!["Too short".to_string(), "Needs a digit".to_string()]);
/// ```
pub fn group_by_code(errors: &[Error]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for error in errors {
        grouped
            .entry(String::from(error.code()))
            .or_default()
            .push(String::from(error.description()));
    }
    grouped
}

/// Status code for one error under the default table.
#[inline]
pub fn status_code(error: &Error) -> u16 {
    let error_type = error.error_type();
    BUILTIN_INFO
        .iter()
        .find(|info| info.error_type == error_type)
        .map_or(FAILURE_INFO.status, |info| info.status)
}

/// Title for one error: its description.
#[inline]
pub fn title(error: &Error) -> String {
    String::from(error.description())
}

/// Problem-details defaults for one [`ErrorType`].
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInfo {
    pub error_type: ErrorType,
    pub status: u16,
    pub type_uri: Cow<'static, str>,
    pub title: Cow<'static, str>,
}

impl ProblemInfo {
    pub fn new(
        error_type: ErrorType,
        status: u16,
        type_uri: impl Into<Cow<'static, str>>,
        title: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { error_type, status, type_uri: type_uri.into(), title: title.into() }
    }

    const fn builtin(
        error_type: ErrorType,
        status: u16,
        type_uri: &'static str,
        title: &'static str,
    ) -> Self {
        Self {
            error_type,
            status,
            type_uri: Cow::Borrowed(type_uri),
            title: Cow::Borrowed(title),
        }
    }
}

const FAILURE_INFO: ProblemInfo = ProblemInfo::builtin(
    ErrorType::FAILURE,
    500,
    "https://tools.ietf.org/html/rfc9110#section-15.6.1",
    "An error occurred while processing your request.",
);

const BUILTIN_INFO: [ProblemInfo; 13] = [
    ProblemInfo::builtin(
        ErrorType::VALIDATION,
        400,
        "https://tools.ietf.org/html/rfc9110#section-15.5.1",
        "Bad Request",
    ),
    ProblemInfo::builtin(
        ErrorType::UNAUTHORIZED,
        401,
        "https://tools.ietf.org/html/rfc9110#section-15.5.2",
        "Unauthorized",
    ),
    ProblemInfo::builtin(
        ErrorType::FORBIDDEN,
        403,
        "https://tools.ietf.org/html/rfc9110#section-15.5.4",
        "Forbidden",
    ),
    ProblemInfo::builtin(
        ErrorType::NOT_FOUND,
        404,
        "https://tools.ietf.org/html/rfc9110#section-15.5.5",
        "Not Found",
    ),
    ProblemInfo::builtin(
        ErrorType::CONFLICT,
        409,
        "https://tools.ietf.org/html/rfc9110#section-15.5.10",
        "Conflict",
    ),
    ProblemInfo::builtin(
        ErrorType::GONE,
        410,
        "https://tools.ietf.org/html/rfc9110#section-15.5.11",
        "Gone",
    ),
    ProblemInfo::builtin(
        ErrorType::PRECONDITION_FAILED,
        412,
        "https://tools.ietf.org/html/rfc9110#section-15.5.13",
        "Precondition Failed",
    ),
    ProblemInfo::builtin(
        ErrorType::UNSUPPORTED_MEDIA_TYPE,
        415,
        "https://tools.ietf.org/html/rfc9110#section-15.5.16",
        "Unsupported Media Type",
    ),
    ProblemInfo::builtin(
        ErrorType::UNPROCESSABLE_ENTITY,
        422,
        "https://tools.ietf.org/html/rfc4918#section-11.2",
        "Unprocessable Entity",
    ),
    ProblemInfo::builtin(
        ErrorType::UNAVAILABLE_FOR_LEGAL_REASONS,
        451,
        "https://tools.ietf.org/html/rfc7725#section-3",
        "Unavailable for Legal Reasons",
    ),
    ProblemInfo::builtin(
        ErrorType::BAD_GATEWAY,
        502,
        "https://tools.ietf.org/html/rfc9110#section-15.6.3",
        "Bad Gateway",
    ),
    ProblemInfo::builtin(
        ErrorType::SERVICE_UNAVAILABLE,
        503,
        "https://tools.ietf.org/html/rfc9110#section-15.6.4",
        "Service Unavailable",
    ),
    ProblemInfo::builtin(
        ErrorType::GATEWAY_TIMEOUT,
        504,
        "https://tools.ietf.org/html/rfc9110#section-15.6.5",
        "Gateway Timeout",
    ),
];

/// Table from [`ErrorType`] to [`ProblemInfo`].
///
/// Seeded with the RFC 9110 mapping. Types without an entry
/// ([`ErrorType::UNEXPECTED`] and custom categories) resolve to the
/// [`ErrorType::FAILURE`] entry, which is always present.
///
/// # Examples
///
/// ```
/// use error_or::problem::{ProblemDefaults, ProblemInfo};
/// use error_or::ErrorType;
///
/// let mut defaults = ProblemDefaults::default();
/// assert_eq!(defaults.resolve(ErrorType::NOT_FOUND).status, 404);
/// assert_eq!(defaults.resolve(ErrorType::UNEXPECTED).status, 500);
///
/// let teapot = ErrorType::from_i32(20);
/// defaults.insert(ProblemInfo::new(teapot, 418, "about:blank", "I'm a teapot"));
/// assert_eq!(defaults.resolve(teapot).status, 418);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDefaults {
    entries: BTreeMap<ErrorType, ProblemInfo>,
    fallback: ProblemInfo,
}

impl ProblemDefaults {
    /// A table with only the failure fallback.
    pub fn empty() -> Self {
        Self { entries: BTreeMap::new(), fallback: FAILURE_INFO }
    }

    /// Adds or replaces the entry for `info.error_type`, returning the old one.
    pub fn insert(&mut self, info: ProblemInfo) -> Option<ProblemInfo> {
        if info.error_type == ErrorType::FAILURE {
            return Some(core::mem::replace(&mut self.fallback, info));
        }
        self.entries.insert(info.error_type, info)
    }

    pub fn get(&self, error_type: ErrorType) -> Option<&ProblemInfo> {
        if error_type == ErrorType::FAILURE {
            return Some(&self.fallback);
        }
        self.entries.get(&error_type)
    }

    /// The entry for `error_type`, or the failure entry.
    pub fn resolve(&self, error_type: ErrorType) -> &ProblemInfo {
        self.entries.get(&error_type).unwrap_or(&self.fallback)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProblemInfo> {
        core::iter::once(&self.fallback).chain(self.entries.values())
    }
}

impl Default for ProblemDefaults {
    fn default() -> Self {
        let mut defaults = Self::empty();
        for info in BUILTIN_INFO {
            defaults.insert(info);
        }
        defaults
    }
}

type StatusMapper = Box<dyn Fn(&Error) -> Option<u16> + Send + Sync>;
type TitleMapper = Box<dyn Fn(&Error) -> Option<String> + Send + Sync>;

/// Configuration for rendering errors at a boundary.
///
/// Mappers are tried in registration order; the first `Some` wins and the
/// defaults apply otherwise.
///
/// # Examples
///
/// ```
/// use error_or::problem::ProblemOptions;
/// use error_or::Error;
///
/// let options = ProblemOptions::default()
///     .map_status(|e| (e.code() == "Rate.Limited").then_some(429))
///     .include_error_metadata(true);
///
/// assert_eq!(options.status_code(&Error::failure("Rate.Limited", "slow down")), 429);
/// assert_eq!(options.status_code(&Error::conflict("User.Duplicate", "taken")), 409);
/// ```
#[derive(Default)]
pub struct ProblemOptions {
    pub defaults: ProblemDefaults,
    pub first_is_leading: bool,
    pub include_error_metadata: bool,
    status_mappers: Vec<StatusMapper>,
    title_mappers: Vec<TitleMapper>,
}

impl ProblemOptions {
    pub fn with_defaults(mut self, defaults: ProblemDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Makes the first error's type lead a mixed list instead of `FAILURE`.
    pub fn first_is_leading(mut self, first_is_leading: bool) -> Self {
        self.first_is_leading = first_is_leading;
        self
    }

    /// Copies every error's metadata into the document's extension members.
    pub fn include_error_metadata(mut self, include: bool) -> Self {
        self.include_error_metadata = include;
        self
    }

    pub fn map_status<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&Error) -> Option<u16> + Send + Sync + 'static,
    {
        self.status_mappers.push(Box::new(mapper));
        self
    }

    pub fn map_title<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&Error) -> Option<String> + Send + Sync + 'static,
    {
        self.title_mappers.push(Box::new(mapper));
        self
    }

    pub fn status_code(&self, error: &Error) -> u16 {
        self.mapped_status(error)
            .unwrap_or_else(|| self.defaults.resolve(error.error_type()).status)
    }

    pub fn title(&self, error: &Error) -> String {
        self.mapped_title(error).unwrap_or_else(|| title(error))
    }

    fn mapped_status(&self, error: &Error) -> Option<u16> {
        self.status_mappers.iter().find_map(|mapper| mapper(error))
    }

    fn mapped_title(&self, error: &Error) -> Option<String> {
        self.title_mappers.iter().find_map(|mapper| mapper(error))
    }

    /// Leading type of `errors` under these options.
    #[track_caller]
    pub fn leading_error_type(&self, errors: &[Error]) -> ErrorType {
        leading_error_type(errors, self.first_is_leading)
    }
}

impl fmt::Debug for ProblemOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProblemOptions")
            .field("defaults", &self.defaults)
            .field("first_is_leading", &self.first_is_leading)
            .field("include_error_metadata", &self.include_error_metadata)
            .field("status_mappers", &self.status_mappers.len())
            .field("title_mappers", &self.title_mappers.len())
            .finish()
    }
}

/// The `errors` member of a [`ProblemDetails`] document.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemErrors {
    /// Validation documents: descriptions grouped by code.
    Grouped(BTreeMap<String, Vec<String>>),
    /// Every other document: the full errors.
    Detailed(Vec<Error>),
}

/// An RFC 9457 problem-details document.
///
/// With the `serde` feature it serializes to the standard members plus
/// `errors`; metadata copied in by
/// [`include_error_metadata`](ProblemOptions::include_error_metadata) is
/// flattened into top-level extension members.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDetails {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub detail: Option<String>,
    pub errors: ProblemErrors,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extensions: Metadata,
}

impl ProblemDetails {
    /// Builds the document for an error list.
    ///
    /// The leading type is resolved against the defaults table first, so an
    /// unknown type lands on the fallback entry. A list that resolves to the
    /// validation entry produces grouped `errors` and no detail. Any other
    /// entry keeps the full errors and sets `detail` to [`DEFAULT_DETAIL`].
    /// Status and title come from the resolved entry unless a registered
    /// mapper answers for the first error.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::problem::{ProblemDetails, ProblemOptions, DEFAULT_DETAIL};
    /// use error_or::{Error, ErrorList};
    ///
    /// let errors = ErrorList::new(
    ///     Error::not_found("User.NotFound", "No such user").with_metadata("id", 7),
    /// );
    /// let options = ProblemOptions::default().include_error_metadata(true);
    /// let problem = ProblemDetails::from_errors(&errors, &options);
    ///
    /// assert_eq!(problem.status, 404);
    /// assert_eq!(problem.title, "Not Found");
    /// assert_eq!(problem.detail.as_deref(), Some(DEFAULT_DETAIL));
    /// assert_eq!(problem.extensions["id"].as_i64(), Some(7));
    /// ```
    pub fn from_errors(errors: &ErrorList, options: &ProblemOptions) -> Self {
        let info = options.defaults.resolve(options.leading_error_type(errors));

        let (problem_errors, detail) = if info.error_type == ErrorType::VALIDATION {
            (ProblemErrors::Grouped(group_by_code(errors)), None)
        } else {
            (ProblemErrors::Detailed(errors.to_vec()), Some(String::from(DEFAULT_DETAIL)))
        };

        let mut extensions = Metadata::new();
        if options.include_error_metadata {
            for (key, value) in errors.iter().filter_map(Error::metadata).flatten() {
                extensions.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }

        let first = errors.first();
        Self {
            type_uri: String::from(info.type_uri.as_ref()),
            title: options.mapped_title(first).unwrap_or_else(|| String::from(info.title.as_ref())),
            status: options.mapped_status(first).unwrap_or(info.status),
            detail,
            errors: problem_errors,
            extensions,
        }
    }

    /// Builds the document for any failed result, or `None` for a value.
    pub fn from_state(state: &dyn ErrorOrState, options: &ProblemOptions) -> Option<Self> {
        state.errors_opt().map(|errors| Self::from_errors(errors, options))
    }
}
