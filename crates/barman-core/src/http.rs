// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Transport seams consumed by generated dispatchers.
//!
//! barman does not ship an HTTP server. Generated code only needs a handful
//! of primitives from whatever server hosts it:
//!
//! | Seam | Used for |
//! |------|----------|
//! | [`Request::verb`] | Choosing the verb handler |
//! | [`Request::path_info`] | Matching the residual path after the mount prefix |
//! | [`Request::attribute`] / [`Request::set_attribute`] | Path variables captured by matchers |
//! | [`Request::parameter`] | Query parameters |
//! | [`Response::set_status`] / [`Response::set_header`] | Authorization failures, CORS, fallbacks |
//!
//! Adapters for a concrete server implement [`Request`] and [`Response`];
//! [`crate::memory`] provides in-memory implementations.

use std::fmt;

/// HTTP verbs understood by the dispatcher.
///
/// Only [`Get`](Verb::Get), [`Post`](Verb::Post), [`Put`](Verb::Put) and
/// [`Delete`](Verb::Delete) can carry routes. The remaining verbs are
/// forwarded straight to their unhandled hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
    /// `TRACE`
    Trace
}

impl Verb {
    /// Verbs that may carry routes, in dispatch order.
    pub const ROUTABLE: [Self; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    /// Upper-case method name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE"
        }
    }

    /// Check if routes can be declared for this verb.
    pub const fn is_routable(&self) -> bool {
        matches!(self, Self::Get | Self::Post | Self::Put | Self::Delete)
    }

    /// Parse a method name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            "TRACE" => Some(Self::Trace),
            _ => None
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP status code.
///
/// A plain `u16` newtype: custom codes need no registration, so
/// [`StatusCode::new`] accepts any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(u16);

impl StatusCode {
    /// 200
    pub const OK: Self = Self(200);
    /// 201
    pub const CREATED: Self = Self(201);
    /// 202
    pub const ACCEPTED: Self = Self(202);
    /// 203
    pub const PARTIAL_INFO: Self = Self(203);
    /// 204
    pub const NO_CONTENT: Self = Self(204);
    /// 301
    pub const MOVED_PERMANENTLY: Self = Self(301);
    /// 302
    pub const FOUND: Self = Self(302);
    /// 303
    pub const SEE_OTHER: Self = Self(303);
    /// 304
    pub const NOT_MODIFIED: Self = Self(304);
    /// 400
    pub const BAD_REQUEST: Self = Self(400);
    /// 401
    pub const UNAUTHORIZED: Self = Self(401);
    /// 402
    pub const PAYMENT_REQUIRED: Self = Self(402);
    /// 403
    pub const FORBIDDEN: Self = Self(403);
    /// 404
    pub const NOT_FOUND: Self = Self(404);
    /// 405
    pub const METHOD_NOT_ALLOWED: Self = Self(405);
    /// 409
    pub const CONFLICT: Self = Self(409);
    /// 410
    pub const GONE: Self = Self(410);
    /// 422
    pub const UNPROCESSABLE_ENTITY: Self = Self(422);
    /// 500
    pub const INTERNAL_ERROR: Self = Self(500);
    /// 501
    pub const NOT_IMPLEMENTED: Self = Self(501);
    /// 502
    pub const BAD_GATEWAY: Self = Self(502);
    /// 503
    pub const SERVICE_UNAVAILABLE: Self = Self(503);
    /// 504
    pub const GATEWAY_TIMEOUT: Self = Self(504);
    /// 505
    pub const HTTP_VERSION_NOT_SUPPORTED: Self = Self(505);

    /// Status code for an arbitrary value.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Numeric value.
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Check if this is a 2xx code.
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        Self::OK
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incoming request as seen by a dispatcher.
///
/// `path_info` is everything after the endpoint's mount prefix: `None` or
/// `""` when the request targets the mount point itself.
pub trait Request {
    /// Verb of the request.
    fn verb(&self) -> Verb;

    /// Residual path after the endpoint mount prefix.
    fn path_info(&self) -> Option<&str>;

    /// Request-scoped attribute.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Store a request-scoped attribute, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: String);

    /// Query (or form) parameter.
    fn parameter(&self, name: &str) -> Option<&str>;

    /// Request header, matched case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Outgoing response as seen by a dispatcher.
pub trait Response {
    /// Current status.
    fn status(&self) -> StatusCode;

    /// Replace the status.
    fn set_status(&mut self, status: StatusCode);

    /// Set a header, replacing any previous value with the same name.
    fn set_header(&mut self, name: &str, value: &str);

    /// Current value of a header set on this response.
    fn header(&self, name: &str) -> Option<&str>;

    /// Replace the body.
    fn set_body(&mut self, body: String);
}
