// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// The result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced when interpreting a [`TimeValue`][crate::TimeValue].
///
/// Two failure classes exist:
///
/// * Parsing errors: a textual value does not match the canonical
///   `"YYYY-MM-DD HH:MM:SS"` layout.
/// * Unsupported input: the value's type cannot be interpreted as a time at all.
///
/// Boundary and formatting functions never produce errors; [`parse`][crate::parse]
/// is the only fallible entry point.
///
/// # Limited introspection
///
/// Beyond implementing the [`std::error::Error`] and [`core::fmt::Debug`] traits, this
/// error type exposes only the [`is_parse`][Error::is_parse] and
/// [`is_unsupported_type`][Error::is_unsupported_type] predicates.
///
/// # Examples
///
/// ```
/// use tock::TimeValue;
///
/// let err = tock::parse(TimeValue::from("not a time")).unwrap_err();
/// assert!(err.is_parse());
/// ```
#[derive(Debug)]
pub struct Error(ErrorKind);

#[derive(Debug)]
enum ErrorKind {
    Parse(jiff::Error),
    UnsupportedType(&'static str),
}

impl Error {
    const fn from_kind(kind: ErrorKind) -> Self {
        Self(kind)
    }

    pub(crate) const fn parse(error: jiff::Error) -> Self {
        Self::from_kind(ErrorKind::Parse(error))
    }

    pub(crate) const fn unsupported_type(type_name: &'static str) -> Self {
        Self::from_kind(ErrorKind::UnsupportedType(type_name))
    }

    /// Returns `true` if this error was caused by text that does not match the
    /// canonical layout.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self.0, ErrorKind::Parse(_))
    }

    /// Returns `true` if this error was caused by a value whose type cannot be
    /// interpreted as a time.
    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(self.0, ErrorKind::UnsupportedType(_))
    }

    #[cfg(test)]
    const fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorKind::Parse(err) => err.fmt(f),
            ErrorKind::UnsupportedType(type_name) => {
                write!(f, "values of type `{type_name}` cannot be interpreted as a time")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            ErrorKind::Parse(err) => Some(err),
            ErrorKind::UnsupportedType(_) => None,
        }
    }
}
