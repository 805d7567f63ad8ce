// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Request path matchers.
//!
//! Generated dispatchers keep one [`Path`] per distinct handler template in a
//! `static` array and probe them in declaration order:
//!
//! ```text
//! Template          Matcher
//! ─────────────────────────────────────────────────────────
//! ""  or  "/"       Path::Index
//! "/login"          Path::Static        (exact comparison)
//! "/{id}"           Path::Parameterized (anchored regex, named groups)
//! ```
//!
//! A parameterized matcher writes every captured group into the request
//! attributes, where [`PathVariable`](crate::value::PathVariable) reads it.

use regex::Regex;

use crate::http::Request;

/// Check if `path_info` addresses the endpoint root.
pub fn is_index_request(path_info: Option<&str>) -> bool {
    matches!(path_info, None | Some("") | Some("/"))
}

/// Matcher for one handler template.
#[derive(Debug, Clone)]
pub enum Path {
    /// Matches requests without extra path info.
    Index,

    /// Matches one literal path.
    Static {
        /// Mounted URI, for diagnostics.
        uri:  &'static str,
        /// Literal compared against the request path info.
        path: &'static str
    },

    /// Matches a template with variable segments.
    Parameterized {
        /// Mounted URI, for diagnostics.
        uri:        &'static str,
        /// Handler template the regex was compiled from.
        pattern:    &'static str,
        /// Anchored regex with one named group per parameter.
        regex:      Regex,
        /// Group names in template order.
        parameters: &'static [&'static str]
    }
}

impl Path {
    /// Matcher for a literal path.
    pub const fn fixed(uri: &'static str, path: &'static str) -> Self {
        Self::Static {
            uri,
            path
        }
    }

    /// Matcher for a template with variable segments.
    ///
    /// `regex` is anchored on both ends before compilation, so a match
    /// always covers the whole path info.
    ///
    /// # Errors
    ///
    /// Returns the `regex` crate error for a malformed expression.
    pub fn parameterized(
        uri: &'static str,
        pattern: &'static str,
        regex: &str,
        parameters: &'static [&'static str]
    ) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{regex})$"))?;
        Ok(Self::Parameterized {
            uri,
            pattern,
            regex,
            parameters
        })
    }

    /// Matcher for a template whose regex was validated when the endpoint
    /// was compiled.
    ///
    /// Generated dispatchers build their matchers with this constructor.
    ///
    /// # Panics
    ///
    /// Panics when `regex` is malformed, which `#[endpoint]` rules out.
    pub fn precompiled(
        uri: &'static str,
        pattern: &'static str,
        regex: &str,
        parameters: &'static [&'static str]
    ) -> Self {
        match Self::parameterized(uri, pattern, regex, parameters) {
            Ok(path) => path,
            Err(err) => panic!("path template {pattern:?} of {uri} failed to compile: {err}")
        }
    }

    /// Check if this matcher accepts the request.
    ///
    /// A parameterized matcher that accepts the request also stores every
    /// captured parameter as a request attribute.
    pub fn matches(&self, request: &mut dyn Request) -> bool {
        match self {
            Self::Index => is_index_request(request.path_info()),
            Self::Static {
                path, ..
            } => {
                let hit = request.path_info() == Some(*path);
                if hit {
                    tracing::trace!(path, "static path matched");
                }
                hit
            }
            Self::Parameterized {
                pattern,
                regex,
                parameters,
                ..
            } => {
                let path_info = request.path_info();
                if is_index_request(path_info) {
                    return false;
                }
                let Some(path_info) = path_info else {
                    return false;
                };
                let values: Vec<(&str, String)> = {
                    let Some(captures) = regex.captures(path_info) else {
                        return false;
                    };
                    parameters
                        .iter()
                        .filter_map(|name| {
                            captures
                                .name(name)
                                .map(|value| (*name, value.as_str().to_string()))
                        })
                        .collect()
                };
                tracing::trace!(pattern, ?values, "parameterized path matched");
                for (name, value) in values {
                    request.set_attribute(name, value);
                }
                true
            }
        }
    }

    /// Check if this is the index matcher.
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index)
    }

    /// Mounted URI, `None` for the index matcher.
    pub const fn uri(&self) -> Option<&'static str> {
        match self {
            Self::Index => None,
            Self::Static {
                uri, ..
            }
            | Self::Parameterized {
                uri, ..
            } => Some(uri)
        }
    }

    /// Parameter names captured by this matcher.
    pub const fn parameters(&self) -> &'static [&'static str] {
        match self {
            Self::Parameterized {
                parameters, ..
            } => parameters,
            _ => &[]
        }
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Index, Self::Index) => true,
            (
                Self::Static {
                    uri: a, ..
                },
                Self::Static {
                    uri: b, ..
                }
            ) => a == b,
            (
                Self::Parameterized {
                    pattern: a, ..
                },
                Self::Parameterized {
                    pattern: b, ..
                }
            ) => a == b,
            _ => false
        }
    }
}

impl Eq for Path {}
