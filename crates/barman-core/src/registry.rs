// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Interned header names and media types.
//!
//! Well-known values are constants. Anything else goes through
//! [`Header::of`] / [`ContentType::of`], which look the value up in a
//! process-wide [`DashMap`] and insert it on first use. Later lookups return
//! the spelling that was registered first.
//!
//! ```rust
//! use barman_core::registry::{ContentType, Header};
//!
//! let header = Header::of("x-request-id").unwrap();
//! assert_eq!(Header::of("X-Request-Id").unwrap(), header);
//! assert_eq!(ContentType::of("application/json").unwrap(), ContentType::JSON);
//! ```

use std::{borrow::Cow, fmt, sync::LazyLock};

use dashmap::DashMap;

use crate::error::{Error, Result};

static HEADERS: LazyLock<DashMap<String, Header>> = LazyLock::new(|| {
    let map = DashMap::new();
    for header in Header::WELL_KNOWN {
        map.insert(header.as_str().to_ascii_lowercase(), header);
    }
    map
});

static CONTENT_TYPES: LazyLock<DashMap<String, ContentType>> = LazyLock::new(|| {
    let map = DashMap::new();
    for content_type in ContentType::WELL_KNOWN {
        map.insert(content_type.as_str().to_string(), content_type);
    }
    map
});

/// HTTP header name.
///
/// Lookup is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header(Cow<'static, str>);

impl Header {
    /// `Access-Control-Allow-Origin`
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: Self = Self(Cow::Borrowed("Access-Control-Allow-Origin"));
    /// `Cache-Control`
    pub const CACHE_CONTROL: Self = Self(Cow::Borrowed("Cache-Control"));
    /// `Connection`
    pub const CONNECTION: Self = Self(Cow::Borrowed("Connection"));
    /// `Content-Type`
    pub const CONTENT_TYPE: Self = Self(Cow::Borrowed("Content-Type"));
    /// `Location`
    pub const LOCATION: Self = Self(Cow::Borrowed("Location"));
    /// `Set-Cookie`
    pub const SET_COOKIE: Self = Self(Cow::Borrowed("Set-Cookie"));
    /// `WWW-Authenticate`
    pub const WWW_AUTHENTICATE: Self = Self(Cow::Borrowed("WWW-Authenticate"));

    const WELL_KNOWN: [Self; 7] = [
        Self::ACCESS_CONTROL_ALLOW_ORIGIN,
        Self::CACHE_CONTROL,
        Self::CONNECTION,
        Self::CONTENT_TYPE,
        Self::LOCATION,
        Self::SET_COOKIE,
        Self::WWW_AUTHENTICATE
    ];

    /// Interned header for `name`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHeader`] when `name` is empty or blank.
    pub fn of(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::InvalidHeader(name.to_string()));
        }
        let header = HEADERS
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| Self(Cow::Owned(name.to_string())))
            .clone();
        Ok(header)
    }

    /// Registered spelling of the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media type used as a `Content-Type` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType(Cow<'static, str>);

impl ContentType {
    /// `text/plain`
    pub const TEXT: Self = Self(Cow::Borrowed("text/plain"));
    /// `text/html`
    pub const HTML: Self = Self(Cow::Borrowed("text/html"));
    /// `text/css`
    pub const CSS: Self = Self(Cow::Borrowed("text/css"));
    /// `application/json`
    pub const JSON: Self = Self(Cow::Borrowed("application/json"));
    /// `application/javascript`
    pub const JAVASCRIPT: Self = Self(Cow::Borrowed("application/javascript"));
    /// `application/xml`
    pub const XML: Self = Self(Cow::Borrowed("application/xml"));
    /// `application/octet-stream`
    pub const OCTET_STREAM: Self = Self(Cow::Borrowed("application/octet-stream"));

    const WELL_KNOWN: [Self; 7] = [
        Self::TEXT,
        Self::HTML,
        Self::CSS,
        Self::JSON,
        Self::JAVASCRIPT,
        Self::XML,
        Self::OCTET_STREAM
    ];

    /// Interned media type for `value`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidContentType`] when `value` is empty or blank.
    pub fn of(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(Error::InvalidContentType(value.to_string()));
        }
        let content_type = CONTENT_TYPES
            .entry(value.to_string())
            .or_insert_with(|| Self(Cow::Owned(value.to_string())))
            .clone();
        Ok(content_type)
    }

    /// Media type string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_header_is_found() {
        assert_eq!(Header::of("location").unwrap(), Header::LOCATION);
        assert_eq!(Header::of("Content-Type").unwrap(), Header::CONTENT_TYPE);
    }

    #[test]
    fn custom_header_keeps_first_spelling() {
        let first = Header::of("X-Barman-Trace").unwrap();
        let second = Header::of("x-barman-trace").unwrap();
        assert_eq!(first, second);
        assert_eq!(second.as_str(), "X-Barman-Trace");
    }

    #[test]
    fn blank_header_is_rejected() {
        assert!(matches!(Header::of(""), Err(Error::InvalidHeader(_))));
        assert!(matches!(Header::of("   "), Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn content_types() {
        assert_eq!(ContentType::of("text/html").unwrap(), ContentType::HTML);
        let csv = ContentType::of("text/csv").unwrap();
        assert_eq!(csv.to_string(), "text/csv");
        assert!(matches!(
            ContentType::of("\t"),
            Err(Error::InvalidContentType(_))
        ));
    }
}
