// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Route model.
//!
//! A [`Route`] binds one verb and one handler template to a handler method,
//! together with the [`Authorization`] the handler demands. Two routes are
//! the same route when they share verb and template, whatever handler or
//! roles they carry.

use std::hash::{Hash, Hasher};

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::path_spec::PathSpec;

/// Role that stands for "any role".
pub const ANY_ROLE: &str = "*";

/// Verbs that can carry routes, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpVerb {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete
}

impl HttpVerb {
    /// All verbs in dispatch order.
    pub const ALL: [Self; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    /// Verb for a handler attribute name.
    pub fn from_attribute(name: &str) -> Option<Self> {
        match name {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "delete" => Some(Self::Delete),
            _ => None
        }
    }

    /// Upper-case method name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE"
        }
    }

    /// Lower-case name, as used in attributes and hook names.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete"
        }
    }

    /// Runtime `Verb` path.
    pub fn runtime(&self) -> TokenStream {
        match self {
            Self::Get => quote! { ::barman::http::Verb::Get },
            Self::Post => quote! { ::barman::http::Verb::Post },
            Self::Put => quote! { ::barman::http::Verb::Put },
            Self::Delete => quote! { ::barman::http::Verb::Delete }
        }
    }
}

/// Role requirements of one handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authorization {
    /// A user must be logged in.
    pub requires_logged_user: bool,

    /// No user may be logged in.
    pub requires_anonymous: bool,

    /// Roles allowed to call the handler.
    pub allowed_roles: Vec<String>,

    /// Roles rejected by the handler.
    pub rejected_roles: Vec<String>
}

impl Authorization {
    /// No requirements at all.
    pub fn open() -> Self {
        Self::default()
    }

    /// Resolve requirements from role lists.
    ///
    /// Allowed roles imply a logged user; rejecting exactly `"*"` demands an
    /// anonymous request.
    ///
    /// # Errors
    ///
    /// Both conditions at once, reported at `span`.
    pub fn from_roles(
        allowed_roles: Vec<String>,
        rejected_roles: Vec<String>,
        span: Span
    ) -> syn::Result<Self> {
        let requires_logged_user = !allowed_roles.is_empty();
        let requires_anonymous = rejected_roles.len() == 1 && rejected_roles[0] == ANY_ROLE;

        if requires_logged_user && requires_anonymous {
            return Err(syn::Error::new(
                span,
                "cannot require both logged and not-logged user: allowed_roles demands a logged \
                 user while rejected_roles(\"*\") demands none"
            ));
        }

        Ok(Self {
            requires_logged_user,
            requires_anonymous,
            allowed_roles,
            rejected_roles
        })
    }
}

/// One verb and template bound to a handler method.
#[derive(Debug, Clone)]
pub struct Route {
    /// Verb answered by the route.
    pub verb: HttpVerb,

    /// Mounted URI.
    pub path: String,

    /// Handler template.
    pub pattern: String,

    /// Unanchored regex, `None` for static templates.
    pub regex: Option<String>,

    /// Path variable names.
    pub parameters: Vec<String>,

    /// Handler method.
    pub handler: Ident,

    /// Role requirements.
    pub authorization: Authorization
}

impl Route {
    /// Route for `verb` from a compiled template.
    pub fn new(verb: HttpVerb, spec: PathSpec, handler: Ident, authorization: Authorization) -> Self {
        Self {
            verb,
            path: spec.raw_path,
            pattern: spec.template,
            regex: spec.regex,
            parameters: spec.parameters,
            handler,
            authorization
        }
    }

    /// Check if the route answers requests addressing the endpoint root.
    pub fn is_index(&self) -> bool {
        is_index_template(&self.pattern)
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.verb == other.verb && self.pattern == other.pattern
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.verb.hash(state);
        self.pattern.hash(state);
    }
}

/// Check if a template addresses the endpoint root.
pub fn is_index_template(template: &str) -> bool {
    template.is_empty() || template == "/"
}
