// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use barman_core::prelude::*;
//! ```

pub use crate::{
    Error, Result,
    http::{Request, Response, StatusCode, Verb},
    registry::{ContentType, Header},
    router::{Endpoint, HasUserRole, RouteInfo, Router},
    value::{PathVariable, QueryParameter}
};
