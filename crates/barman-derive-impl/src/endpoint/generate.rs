// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Router` implementation generation.
//!
//! # Generated Code
//!
//! For an endpoint like:
//!
//! ```rust,ignore
//! #[endpoint(path = "tasks")]
//! #[logged_user(allowed_roles("admin"))]
//! impl Tasks {
//!     #[get("/{id}")]
//!     fn task(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> { ... }
//! }
//! ```
//!
//! The macro generates, next to the untouched `impl` block:
//!
//! ```rust,ignore
//! const _: () = {
//!     static __BARMAN_PATHS: LazyLock<[Path; 1]> = LazyLock::new(|| [
//!         Path::precompiled("/api/tasks/{id}", "/{id}", "/(?<id>[^/]+)", &["id"])
//!     ]);
//!
//!     impl Router for Tasks {
//!         const MAPPING: &'static str = "/api/tasks/*";
//!         const ROUTES: &'static [RouteInfo] = &[RouteInfo { ... }];
//!
//!         fn do_get(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
//!             let __barman_user = <Self as Endpoint>::current_user(self, &*request);
//!             let __barman_role = __barman_user.as_ref().map(HasUserRole::role);
//!             if __barman_user.is_none() { return not_authorized(&*request, response); }
//!             if __barman_role != Some("admin") { return not_authorized(&*request, response); }
//!             if __BARMAN_PATHS[0].matches(request) { return Self::task(self, request, response); }
//!             <Self as Endpoint>::unhandled_get(self, request, response)
//!         }
//!         // do_post, do_put, do_delete
//!     }
//! };
//! ```
//!
//! Every item is addressed through `::barman`, so the endpoint crate needs
//! no imports of its own.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemImpl;

use super::{
    dispatch::{Branch, DispatchPlan, Guards, MatcherRef, RoleTest, VerbPlan},
    route::Route,
    table::RouteTable
};

/// Generate the `Router` implementation for `item`.
pub fn generate(item: &ItemImpl, table: &RouteTable, plan: &DispatchPlan<'_>) -> TokenStream {
    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    let paths = generate_paths(&plan.matchers);
    let mapping = table.mapping();
    let routes = table.routes().iter().map(generate_route_info);
    let handlers = plan.verbs.iter().map(generate_verb);

    quote! {
        const _: () = {
            #paths

            #[automatically_derived]
            impl #impl_generics ::barman::router::Router for #self_ty #where_clause {
                const MAPPING: &'static str = #mapping;

                const ROUTES: &'static [::barman::router::RouteInfo] = &[
                    #(#routes),*
                ];

                #(#handlers)*
            }
        };
    }
}

/// Shared matcher array, one slot per [`MatcherRef::Slot`].
fn generate_paths(matchers: &[&Route]) -> TokenStream {
    if matchers.is_empty() {
        return TokenStream::new();
    }

    let count = matchers.len();
    let paths = matchers.iter().map(|route| {
        let uri = &route.path;
        let pattern = &route.pattern;
        match &route.regex {
            Some(regex) => {
                let parameters = &route.parameters;
                quote! {
                    ::barman::path::Path::precompiled(#uri, #pattern, #regex, &[#(#parameters),*])
                }
            }
            None => quote! { ::barman::path::Path::fixed(#uri, #pattern) }
        }
    });

    quote! {
        static __BARMAN_PATHS: ::barman::__private::LazyLock<[::barman::path::Path; #count]> =
            ::barman::__private::LazyLock::new(|| [#(#paths),*]);
    }
}

fn generate_route_info(route: &Route) -> TokenStream {
    let verb = route.verb.runtime();
    let path = &route.path;
    let pattern = &route.pattern;
    let handler = route.handler.to_string();
    let handler = handler.strip_prefix("r#").unwrap_or(&handler);
    let parameters = &route.parameters;
    let allowed = &route.authorization.allowed_roles;
    let rejected = &route.authorization.rejected_roles;

    quote! {
        ::barman::router::RouteInfo {
            verb: #verb,
            path: #path,
            pattern: #pattern,
            handler: #handler,
            parameters: &[#(#parameters),*],
            allowed_roles: &[#(#allowed),*],
            rejected_roles: &[#(#rejected),*]
        }
    }
}

fn generate_verb(plan: &VerbPlan<'_>) -> TokenStream {
    let do_verb = format_ident!("do_{}", plan.verb.name());
    let unhandled = format_ident!("unhandled_{}", plan.verb.name());
    let verb_name = plan.verb.as_str();

    let cors = plan.development.then(|| {
        quote! {
            ::barman::response::set_header(
                response,
                &::barman::registry::Header::ACCESS_CONTROL_ALLOW_ORIGIN,
                "*"
            )?;
        }
    });

    let user = plan.needs_user().then(|| {
        quote! {
            let __barman_user =
                <Self as ::barman::router::Endpoint>::current_user(self, &*request);
        }
    });

    let role = plan.needs_role().then(|| {
        quote! {
            let __barman_role: ::core::option::Option<&str> =
                __barman_user.as_ref().map(::barman::router::HasUserRole::role);
        }
    });

    let hoisted = generate_guards(&plan.hoisted);
    let branches = plan.branches.iter().map(generate_branch);

    quote! {
        fn #do_verb(
            &self,
            request: &mut dyn ::barman::http::Request,
            response: &mut dyn ::barman::http::Response
        ) -> ::barman::Result<()> {
            #cors
            #user
            #role
            #hoisted
            #(#branches)*
            ::barman::__private::tracing::debug!(
                verb = #verb_name,
                path = request.path_info().unwrap_or("/"),
                "no route matched"
            );
            <Self as ::barman::router::Endpoint>::#unhandled(self, request, response)
        }
    }
}

fn generate_branch(branch: &Branch<'_>) -> TokenStream {
    let matcher = match branch.matcher {
        MatcherRef::Index => quote! { ::barman::path::Path::Index },
        MatcherRef::Slot(slot) => quote! { __BARMAN_PATHS[#slot] }
    };
    let guards = generate_guards(&branch.guards);
    let handler = &branch.route.handler;

    quote! {
        if #matcher.matches(request) {
            #guards
            return Self::#handler(self, request, response);
        }
    }
}

/// Guard checks in evaluation order: logged, anonymous, allowed, rejected.
fn generate_guards(guards: &Guards) -> TokenStream {
    let reject = quote! {
        return ::barman::response::not_authorized(&*request, response);
    };

    let logged = guards.logged_user.then(|| {
        quote! { if __barman_user.is_none() { #reject } }
    });
    let anonymous = guards.anonymous.then(|| {
        quote! { if __barman_user.is_some() { #reject } }
    });
    let allowed = guards.allowed.as_ref().map(|test| {
        let hit = role_matches(test);
        quote! { if !(#hit) { #reject } }
    });
    let rejected = guards.rejected.as_ref().map(|test| {
        let hit = role_matches(test);
        quote! { if #hit { #reject } }
    });

    quote! {
        #logged
        #anonymous
        #allowed
        #rejected
    }
}

/// Boolean expression true when the current role passes `test`.
fn role_matches(test: &RoleTest) -> TokenStream {
    match test {
        RoleTest::Equals(role) => quote! {
            __barman_role == ::core::option::Option::Some(#role)
        },
        RoleTest::OneOf(roles) => quote! {
            ::core::matches!(__barman_role, ::core::option::Option::Some(#(#roles)|*))
        }
    }
}
