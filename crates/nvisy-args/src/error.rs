//! Error type for argument construction.

use std::borrow::Cow;

use thiserror::Error;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned when an argument fails validation.
///
/// Raised either by a setter, when the value it was given is invalid on its
/// own, or by `build`, when the staged record fails a layer of the
/// validation chain.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A field was absent, empty or out of bounds.
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the offending field, e.g. `bucketName`.
        field: &'static str,
        /// Human-readable description of the violated constraint.
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Creates a new invalid argument error.
    pub fn invalid_argument(field: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field, .. } => field,
        }
    }

    /// Returns the reason the field was rejected.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument { reason, .. } => reason,
        }
    }

    /// Returns whether this error reports an invalid argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
