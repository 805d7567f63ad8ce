// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[endpoint]` attribute implementation.
//!
//! # Architecture
//!
//! ```text
//! endpoint.rs (orchestrator)
//! │
//! ├── parse/        → EndpointDef from the attribute and the impl block
//! ├── path_spec.rs  → handler template → regex + parameter names
//! ├── route.rs      → Route, Authorization, HttpVerb
//! ├── table.rs      → RouteTable: base path, conventions, duplicates
//! ├── dispatch.rs   → DispatchPlan: guard hoisting, matcher slots
//! └── generate.rs   → impl Router tokens
//! ```
//!
//! The annotated block is always emitted again with its routing attributes
//! removed. When anything is wrong, the errors are emitted next to it
//! instead of the generated router, so handler bodies still type-check and
//! only the real problems are reported.

mod dispatch;
mod generate;
mod parse;
mod path_spec;
mod route;
mod table;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemImpl;

use self::{
    dispatch::DispatchPlan,
    parse::{EndpointArgs, EndpointDef, strip_routing},
    table::RouteTable
};

/// Expand `#[endpoint(attr)]` applied to `item`.
pub fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut item: ItemImpl = match syn::parse2(item.clone()) {
        Ok(item) => item,
        Err(err) => {
            let err = syn::Error::new(
                err.span(),
                "#[endpoint] must be placed on an inherent impl block"
            )
            .to_compile_error();
            return quote! { #item #err };
        }
    };

    let args = match EndpointArgs::parse(attr) {
        Ok(args) => args,
        Err(err) => {
            strip_routing(&mut item);
            let err = err.write_errors();
            return quote! { #item #err };
        }
    };

    let router = build(args, &item);
    strip_routing(&mut item);

    match router {
        Ok(router) => quote! { #item #router },
        Err(err) => {
            let err = err.to_compile_error();
            quote! { #item #err }
        }
    }
}

fn build(args: EndpointArgs, item: &ItemImpl) -> syn::Result<TokenStream> {
    let development = args.environment().is_development();
    let def = EndpointDef::from_impl(args, item)?;
    let table = RouteTable::build(&def)?;
    let plan = DispatchPlan::build(&table, development);
    Ok(generate::generate(item, &table, &plan))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(tokens: &TokenStream) -> String {
        tokens
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    #[test]
    fn emits_stripped_block_and_router() {
        let out = expand(
            quote!(path = "tasks", environment = "production"),
            quote! {
                #[logged_user]
                impl Tasks {
                    #[get("/{id}")]
                    fn task(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
                        Ok(())
                    }
                }
            }
        );
        let file: syn::File = syn::parse2(out.clone()).unwrap();
        assert_eq!(file.items.len(), 2);

        let text = compact(&out);
        assert!(!text.contains("#[get"));
        assert!(!text.contains("#[logged_user"));
        assert!(text.contains("::barman::router::RouterforTasks"));
        assert!(!text.contains("ACCESS_CONTROL_ALLOW_ORIGIN"));
    }

    #[test]
    fn errors_replace_router() {
        let out = expand(
            TokenStream::new(),
            quote! {
                impl Tasks {
                    #[get("/x")]
                    fn a(&self) {}

                    #[get("/x")]
                    fn b(&self) {}
                }
            }
        );
        let text = compact(&out);
        assert!(text.contains("compile_error!"));
        assert!(text.contains("implTasks"));
        assert!(!text.contains("Router"));
        assert!(!text.contains("#[get"));
    }

    #[test]
    fn bad_arguments_are_reported() {
        let out = expand(
            quote!(environment = "staging"),
            quote! {
                impl Tasks {
                    #[get]
                    fn index(&self) {}
                }
            }
        );
        let text = compact(&out);
        assert!(text.contains("compile_error!"));
        assert!(!text.contains("#[get]"));
    }

    #[test]
    fn non_impl_item_is_rejected() {
        let out = expand(TokenStream::new(), quote! { struct Tasks; });
        let text = compact(&out);
        assert!(text.contains("structTasks;"));
        assert!(text.contains("inherentimplblock"));
    }
}
