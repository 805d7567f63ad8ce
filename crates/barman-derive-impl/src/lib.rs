// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Procedural macro behind `barman`. Depend on `barman` instead.
//!
//! # Attribute Quick Reference
//!
//! ## Endpoint-Level
//!
//! ```rust,ignore
//! #[endpoint(
//!     path = "tasks",              // Optional: base path (default: lower-cased type name)
//!     admin,                       // Optional: mount under /admin instead of /api
//!     environment = "production"   // Optional: default from BARMAN_ENVIRONMENT
//! )]
//! #[logged_user(allowed_roles("admin"))]   // Optional: default for every handler
//! impl Tasks { /* ... */ }
//! ```
//!
//! ## Handler-Level
//!
//! ```rust,ignore
//! impl Tasks {
//!     #[get]                                  // GET /api/tasks (index, save, update, delete map to the root)
//!     #[get("/{id}")]                         // GET /api/tasks/{id}
//!     #[put("/{id: :digit:+}")]               // PUT with a custom segment pattern
//!     #[logged_user(rejected_roles("*"))]     // Overrides the impl default
//!     fn task(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> { /* ... */ }
//! }
//! ```
//!
//! # Authorization
//!
//! | Attribute | Passes when |
//! |-----------|-------------|
//! | `#[logged_user]` | any user is logged in |
//! | `#[logged_user(allowed_roles("a", "b"))]` | the user's role is `a` or `b` |
//! | `#[logged_user(rejected_roles("a"))]` | no user, or the user's role is not `a` |
//! | `#[logged_user(rejected_roles("*"))]` | no user is logged in |
//!
//! Failing requests are answered with 403 Forbidden and never reach the
//! handler.

mod endpoint;
mod utils;

use proc_macro::TokenStream;

/// Generate a `Router` implementation from an annotated `impl` block.
///
/// # Overview
///
/// Every method carrying `#[get]`, `#[post]`, `#[put]` or `#[delete]` becomes
/// a route. Routes of one verb are probed in declaration order and the first
/// matching one wins. Requests no route accepts go to the `unhandled_*` hooks
/// of `Endpoint`.
///
/// # Example
///
/// ```rust,ignore
/// use barman::prelude::*;
///
/// #[endpoint(path = "tasks")]
/// #[logged_user]
/// impl Tasks {
///     #[get]
///     fn index(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
///         barman::response::write_json(response, "[]")
///     }
///
///     #[get("/{id}")]
///     fn task(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
///         let id = TASK_ID.get(request)?;
///         barman::response::write_text(response, &id.to_string())
///     }
/// }
/// ```
///
/// # Compile-Time Checks
///
/// | Error | Cause |
/// |-------|-------|
/// | duplicate route | two handlers share verb and template |
/// | invalid path template | a custom segment pattern is not a valid regex |
/// | cannot require both logged and not-logged user | `allowed_roles` combined with `rejected_roles("*")` |
/// | handler methods must take `&self` | routing attribute on an associated function |
#[proc_macro_attribute]
pub fn endpoint(attr: TokenStream, item: TokenStream) -> TokenStream {
    endpoint::expand(attr.into(), item.into()).into()
}
