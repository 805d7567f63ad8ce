// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory [`Request`] and [`Response`] implementations.
//!
//! Useful for tests and for embedding a generated router behind a transport
//! that is not an HTTP server.
//!
//! ```rust
//! use barman_core::{http::{Request, Verb}, memory::MemoryRequest};
//!
//! let request = MemoryRequest::new(Verb::Get)
//!     .with_path_info("/42")
//!     .with_parameter("page", "2")
//!     .with_header("Accept", "text/html");
//!
//! assert_eq!(request.parameter("page"), Some("2"));
//! assert_eq!(request.header("accept"), Some("text/html"));
//! ```

use std::collections::HashMap;

use crate::http::{Request, Response, StatusCode, Verb};

/// Request held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryRequest {
    verb:       Verb,
    path_info:  Option<String>,
    attributes: HashMap<String, String>,
    parameters: HashMap<String, String>,
    headers:    HashMap<String, String>
}

impl MemoryRequest {
    /// Request for `verb` addressing the endpoint root.
    pub fn new(verb: Verb) -> Self {
        Self {
            verb,
            path_info: None,
            attributes: HashMap::new(),
            parameters: HashMap::new(),
            headers: HashMap::new()
        }
    }

    /// Set the path info.
    pub fn with_path_info(mut self, path_info: impl Into<String>) -> Self {
        self.path_info = Some(path_info.into());
        self
    }

    /// Add a query parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// All attributes set so far.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }
}

impl Request for MemoryRequest {
    fn verb(&self) -> Verb {
        self.verb
    }

    fn path_info(&self) -> Option<&str> {
        self.path_info.as_deref()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        self.attributes.insert(name.to_string(), value);
    }

    fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Response held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResponse {
    status:  StatusCode,
    headers: HashMap<String, (String, String)>,
    body:    Option<String>
}

impl MemoryResponse {
    /// Empty response with status 200.
    pub fn new() -> Self {
        Self::default()
    }

    /// Body written so far.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Number of distinct headers set.
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }
}

impl Response for MemoryResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(
            name.to_ascii_lowercase(),
            (name.to_string(), value.to_string())
        );
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    fn set_body(&mut self, body: String) {
        self.body = Some(body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_to_root() {
        let request = MemoryRequest::new(Verb::Put);
        assert_eq!(request.verb(), Verb::Put);
        assert_eq!(request.path_info(), None);
        assert_eq!(request.attribute("id"), None);
    }

    #[test]
    fn attributes_are_replaced() {
        let mut request = MemoryRequest::new(Verb::Get).with_attribute("id", "1");
        request.set_attribute("id", "2".to_string());
        assert_eq!(request.attribute("id"), Some("2"));
        assert_eq!(request.attributes().len(), 1);
    }

    #[test]
    fn response_headers_are_case_insensitive() {
        let mut response = MemoryResponse::new();
        response.set_header("Location", "/a");
        response.set_header("location", "/b");
        assert_eq!(response.header("LOCATION"), Some("/b"));
        assert_eq!(response.header_count(), 1);
    }

    #[test]
    fn response_defaults() {
        let mut response = MemoryResponse::new();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), None);
        response.set_body("hi".to_string());
        assert_eq!(response.body(), Some("hi"));
    }
}
