// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing of `#[endpoint]` input.
//!
//! # Architecture
//!
//! ```text
//! #[endpoint(path = "tasks")]          → args.rs        EndpointArgs
//! #[logged_user(...)]                  → logged_user.rs LoggedUser (impl default)
//! impl Tasks {
//!     #[get("/{id}")]                  → handler.rs     HandlerDef
//!     #[logged_user(...)]              → logged_user.rs LoggedUser (method)
//!     fn task(&self, ...) { ... }
//! }
//! ```
//!
//! The result is an [`EndpointDef`]: the type being routed, the endpoint
//! options and the handler list in declaration order.

mod args;
mod handler;
mod logged_user;

pub use args::EndpointArgs;
pub use handler::{HandlerDef, VerbDecl};
pub use logged_user::LoggedUser;
use syn::{Ident, ImplItem, ItemImpl, Type};

use self::{
    handler::{parse_handler, strip_routing_attributes},
    logged_user::{is_logged_user, parse_logged_user}
};
use crate::utils::diagnostics::Diagnostics;

/// Everything the route table needs from one annotated `impl` block.
#[derive(Debug)]
pub struct EndpointDef {
    /// Name of the routed type.
    pub ident: Ident,

    /// Endpoint options.
    pub args: EndpointArgs,

    /// `impl`-level `#[logged_user]`, the default for every handler.
    pub logged_user: Option<LoggedUser>,

    /// Handlers in declaration order.
    pub handlers: Vec<HandlerDef>
}

impl EndpointDef {
    /// Parse an annotated `impl` block.
    ///
    /// # Errors
    ///
    /// Every problem found, combined into one error.
    pub fn from_impl(args: EndpointArgs, item: &ItemImpl) -> syn::Result<Self> {
        let mut diagnostics = Diagnostics::new();

        if let Some((_, path, _)) = &item.trait_ {
            diagnostics.push(syn::Error::new_spanned(
                path,
                "#[endpoint] must be placed on an inherent impl block, not a trait impl"
            ));
        }

        let ident = match type_ident(&item.self_ty) {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    &item.self_ty,
                    "#[endpoint] requires a named type"
                ));
            }
        };

        let mut logged_user = None;
        for attr in item.attrs.iter().filter(|attr| is_logged_user(attr)) {
            if logged_user.is_some() {
                diagnostics.push(syn::Error::new_spanned(
                    attr,
                    "duplicate #[logged_user] attribute"
                ));
            }
            logged_user = diagnostics.take(parse_logged_user(attr));
        }

        let handlers = item
            .items
            .iter()
            .filter_map(|item| match item {
                ImplItem::Fn(method) => diagnostics.take(parse_handler(method)).flatten(),
                _ => None
            })
            .collect();

        diagnostics.finish(Self {
            ident,
            args,
            logged_user,
            handlers
        })
    }
}

/// Remove every routing attribute from the block and its methods.
pub fn strip_routing(item: &mut ItemImpl) {
    strip_routing_attributes(&mut item.attrs);
    for impl_item in &mut item.items {
        if let ImplItem::Fn(method) = impl_item {
            strip_routing_attributes(&mut method.attrs);
        }
    }
}

fn type_ident(ty: &Type) -> Option<&Ident> {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            path.path.segments.last().map(|segment| &segment.ident)
        }
        Type::Group(group) => type_ident(&group.elem),
        Type::Paren(paren) => type_ident(&paren.elem),
        _ => None
    }
}
