// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Helpers for writing common responses.
//!
//! Each helper returns `Ok(())` so a handler can end with it:
//!
//! ```rust
//! use barman_core::{
//!     Result,
//!     http::{Request, Response},
//!     response
//! };
//!
//! fn show(_request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
//!     response::write_json(response, r#"{"ok":true}"#)
//! }
//! ```

use crate::{
    error::Result,
    http::{Request, Response, StatusCode},
    registry::{ContentType, Header}
};

/// Set the response status.
pub fn set_status(response: &mut dyn Response, status: StatusCode) -> Result<()> {
    response.set_status(status);
    Ok(())
}

/// Set a registered header.
pub fn set_header(response: &mut dyn Response, header: &Header, value: &str) -> Result<()> {
    response.set_header(header.as_str(), value);
    Ok(())
}

/// Set the `Content-Type` header.
pub fn set_content_type(response: &mut dyn Response, content_type: &ContentType) -> Result<()> {
    set_header(response, &Header::CONTENT_TYPE, content_type.as_str())
}

/// Reject the request with 403 Forbidden.
pub fn not_authorized(request: &dyn Request, response: &mut dyn Response) -> Result<()> {
    tracing::debug!(
        verb = %request.verb(),
        path = request.path_info().unwrap_or("/"),
        "request not authorized"
    );
    set_status(response, StatusCode::FORBIDDEN)
}

/// Answer 405 Method Not Allowed.
pub fn method_not_allowed(request: &dyn Request, response: &mut dyn Response) -> Result<()> {
    tracing::debug!(
        verb = %request.verb(),
        path = request.path_info().unwrap_or("/"),
        "method not allowed"
    );
    set_status(response, StatusCode::METHOD_NOT_ALLOWED)
}

/// Answer 404 Not Found.
pub fn not_found(response: &mut dyn Response) -> Result<()> {
    set_status(response, StatusCode::NOT_FOUND)
}

/// Answer 422 Unprocessable Entity.
pub fn unprocessable_entity(response: &mut dyn Response) -> Result<()> {
    set_status(response, StatusCode::UNPROCESSABLE_ENTITY)
}

/// Redirect to `location` with the given status.
///
/// The connection is marked for closing.
pub fn redirect(response: &mut dyn Response, status: StatusCode, location: &str) -> Result<()> {
    response.set_status(status);
    set_header(response, &Header::LOCATION, location)?;
    set_header(response, &Header::CONNECTION, "close")
}

/// Write `body` with the given content type and status 200.
pub fn write(response: &mut dyn Response, content_type: &ContentType, body: &str) -> Result<()> {
    response.set_status(StatusCode::OK);
    set_content_type(response, content_type)?;
    response.set_body(body.to_string());
    Ok(())
}

/// Write a `text/plain` body.
pub fn write_text(response: &mut dyn Response, body: &str) -> Result<()> {
    write(response, &ContentType::TEXT, body)
}

/// Write a `text/html` body.
pub fn write_html(response: &mut dyn Response, body: &str) -> Result<()> {
    write(response, &ContentType::HTML, body)
}

/// Write an `application/json` body.
///
/// `body` must already be serialized.
pub fn write_json(response: &mut dyn Response, body: &str) -> Result<()> {
    write(response, &ContentType::JSON, body)
}
