// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime types for barman generated endpoints.
//!
//! The `#[endpoint]` macro turns an annotated `impl` block into a
//! [`Router`](router::Router) implementation. Everything that generated code
//! touches at request time lives here; this crate can also be used on its
//! own for hand-written routers.
//!
//! # Overview
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`http`] | [`Request`](http::Request) / [`Response`](http::Response) seams, [`Verb`](http::Verb), [`StatusCode`](http::StatusCode) |
//! | [`path`] | Index, static and parameterized [`Path`](path::Path) matchers |
//! | [`router`] | [`Endpoint`](router::Endpoint), [`Router`](router::Router), [`RouteInfo`](router::RouteInfo) |
//! | [`value`] | Typed [`PathVariable`](value::PathVariable) and [`QueryParameter`](value::QueryParameter) readers |
//! | [`interpret`] | Stock interpreters for raw values |
//! | [`response`] | Status, redirect and body helpers |
//! | [`registry`] | Interned [`Header`](registry::Header) and [`ContentType`](registry::ContentType) values |
//! | [`memory`] | In-memory request and response |
//! | [`prelude`] | Convenient re-exports |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod http;
pub mod interpret;
pub mod memory;
pub mod path;
pub mod prelude;
pub mod registry;
pub mod response;
pub mod router;
pub mod value;

pub use error::{Error, Result};

/// Re-exports for generated code. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use std::sync::LazyLock;

    pub use tracing;
}
