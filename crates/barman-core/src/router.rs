// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Endpoint and router traits.
//!
//! # Overview
//!
//! ```text
//! #[endpoint(...)] impl Tasks { ... }
//!         │
//!         ├── impl Endpoint for Tasks   (written by hand)
//!         │     current_user, unhandled_* hooks
//!         │
//!         └── impl Router for Tasks     (generated)
//!               MAPPING, ROUTES, do_get/do_post/do_put/do_delete
//! ```
//!
//! [`Endpoint`] is the part the author supplies: how to find the logged-in
//! user and what to do with requests no route accepts. [`Router`] is the
//! part the macro synthesizes from the handler attributes.

use crate::{
    error::Result,
    http::{Request, Response, Verb},
    response
};

/// A logged-in user, as far as authorization is concerned.
pub trait HasUserRole {
    /// Role name compared against `allowed_roles` / `rejected_roles`.
    fn role(&self) -> &str;
}

/// Hand-written half of an endpoint.
///
/// Every unhandled hook defaults to 405 Method Not Allowed.
///
/// # Example
///
/// ```rust
/// use barman_core::prelude::*;
///
/// struct Account {
///     role: String
/// }
///
/// impl HasUserRole for Account {
///     fn role(&self) -> &str {
///         &self.role
///     }
/// }
///
/// struct Tasks;
///
/// impl Endpoint for Tasks {
///     type User = Account;
///
///     fn current_user(&self, request: &dyn Request) -> Option<Account> {
///         request.header("X-Role").map(|role| Account {
///             role: role.to_string()
///         })
///     }
/// }
/// ```
pub trait Endpoint {
    /// User type produced by [`current_user`](Endpoint::current_user).
    type User: HasUserRole;

    /// User logged in for `request`, if any.
    fn current_user(&self, request: &dyn Request) -> Option<Self::User>;

    /// GET request no route accepted.
    fn unhandled_get(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
        response::method_not_allowed(request, response)
    }

    /// POST request no route accepted.
    fn unhandled_post(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
        response::method_not_allowed(request, response)
    }

    /// PUT request no route accepted.
    fn unhandled_put(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
        response::method_not_allowed(request, response)
    }

    /// DELETE request no route accepted.
    fn unhandled_delete(
        &self,
        request: &mut dyn Request,
        response: &mut dyn Response
    ) -> Result<()> {
        response::method_not_allowed(request, response)
    }

    /// HEAD request.
    fn unhandled_head(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
        response::method_not_allowed(request, response)
    }

    /// OPTIONS request.
    fn unhandled_options(
        &self,
        request: &mut dyn Request,
        response: &mut dyn Response
    ) -> Result<()> {
        response::method_not_allowed(request, response)
    }

    /// TRACE request.
    fn unhandled_trace(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
        response::method_not_allowed(request, response)
    }
}

/// Static description of one generated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    /// Verb the route answers.
    pub verb:           Verb,
    /// Mounted URI, endpoint base joined with the template.
    pub path:           &'static str,
    /// Handler template, relative to the endpoint base.
    pub pattern:        &'static str,
    /// Name of the handler method.
    pub handler:        &'static str,
    /// Path variable names in template order.
    pub parameters:     &'static [&'static str],
    /// Roles allowed to call the handler; empty means anyone.
    pub allowed_roles:  &'static [&'static str],
    /// Roles rejected by the handler; `["*"]` means logged users.
    pub rejected_roles: &'static [&'static str]
}

impl RouteInfo {
    /// Check if the route needs a logged-in user.
    pub const fn requires_logged_user(&self) -> bool {
        !self.allowed_roles.is_empty()
    }

    /// Check if the route rejects logged-in users.
    pub fn requires_anonymous(&self) -> bool {
        matches!(self.rejected_roles, ["*"])
    }

    /// Check if the route answers requests addressing the endpoint root.
    pub fn is_index(&self) -> bool {
        self.pattern.is_empty() || self.pattern == "/"
    }
}

/// Generated half of an endpoint.
///
/// Implemented by `#[endpoint]`; there is rarely a reason to implement it
/// by hand.
pub trait Router: Endpoint {
    /// Servlet-style mapping, the endpoint base followed by `/*`.
    const MAPPING: &'static str;

    /// Every route of the endpoint, grouped by verb in declaration order.
    const ROUTES: &'static [RouteInfo];

    /// Route a GET request.
    fn do_get(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()>;

    /// Route a POST request.
    fn do_post(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()>;

    /// Route a PUT request.
    fn do_put(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()>;

    /// Route a DELETE request.
    fn do_delete(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()>;

    /// Route a request by its verb.
    fn dispatch(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
        match request.verb() {
            Verb::Get => self.do_get(request, response),
            Verb::Post => self.do_post(request, response),
            Verb::Put => self.do_put(request, response),
            Verb::Delete => self.do_delete(request, response),
            Verb::Head => self.unhandled_head(request, response),
            Verb::Options => self.unhandled_options(request, response),
            Verb::Trace => self.unhandled_trace(request, response)
        }
    }

    /// Routes answering `verb`, in declaration order.
    fn routes_for(verb: Verb) -> impl Iterator<Item = &'static RouteInfo> {
        Self::ROUTES.iter().filter(move |route| route.verb == verb)
    }
}
