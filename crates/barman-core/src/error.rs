// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime error type for dispatch and request value reading.
//!
//! Configuration problems (duplicate routes, conflicting role requirements,
//! malformed path regexes) never reach this type: the `#[endpoint]` macro
//! rejects them at compile time. What remains are contract violations that
//! only a live request can reveal.

use crate::http::Verb;

/// Errors raised while dispatching a request or reading values from it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required path variable or query parameter is absent.
    ///
    /// Carries the parameter name and enough of the offending request to
    /// identify it in logs.
    #[error("value '{name}' is not defined at {verb} {}", .path.as_deref().unwrap_or("/"))]
    ValueNotDefined {
        /// Name of the missing value.
        name: String,
        /// Verb of the offending request.
        verb: Verb,
        /// Path info of the offending request.
        path: Option<String>
    },

    /// A value is present but could not be interpreted.
    #[error("value '{name}' = {value:?} is invalid: {reason}")]
    InvalidValue {
        /// Name of the value.
        name:   String,
        /// Raw value found at the request.
        value:  String,
        /// Why the interpreter rejected it.
        reason: String
    },

    /// A header name was empty or blank.
    #[error("invalid header name {0:?}: must not be empty or blank")]
    InvalidHeader(String),

    /// A media type was empty or blank.
    #[error("invalid media type {0:?}: must not be empty or blank")]
    InvalidContentType(String),

    /// A handler failed for its own reasons.
    #[error(transparent)]
    Handler(#[from] Box<dyn std::error::Error + Send + Sync>)
}

impl Error {
    /// Check if this error reports a missing request value.
    pub const fn is_not_defined(&self) -> bool {
        matches!(self, Self::ValueNotDefined { .. })
    }

    /// Name of the request value involved, if any.
    pub fn value_name(&self) -> Option<&str> {
        match self {
            Self::ValueNotDefined {
                name, ..
            }
            | Self::InvalidValue {
                name, ..
            } => Some(name),
            _ => None
        }
    }

    /// Wrap an arbitrary handler failure.
    pub fn handler<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static
    {
        Self::Handler(Box::new(err))
    }
}

/// Result alias used by handlers and generated dispatch methods.
pub type Result<T> = std::result::Result<T, Error>;
