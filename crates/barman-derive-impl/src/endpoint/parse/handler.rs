// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Handler method parsing.
//!
//! ```rust,ignore
//! #[get]                      // convention: "" for index/save/update/delete, "/name" otherwise
//! #[post("/login")]           // explicit template
//! #[put("{id}")]              // leading slash added: "/{id}"
//! #[get] #[delete("/{id}")]   // one method, two routes
//! ```

use proc_macro2::Span;
use syn::{Attribute, Ident, ImplItemFn, LitStr, spanned::Spanned};

use super::logged_user::{LoggedUser, is_logged_user, parse_logged_user};
use crate::{endpoint::route::HttpVerb, utils::diagnostics::Diagnostics};

/// One verb attribute on a handler.
#[derive(Debug, Clone)]
pub struct VerbDecl {
    /// Declared verb.
    pub verb: HttpVerb,

    /// Explicit template, `None` for the bare form.
    pub path: Option<String>,

    /// Span of the attribute.
    pub span: Span
}

/// Handler method with its routing attributes.
///
/// Neutral input of the route table: any front-end that can produce these
/// can drive route compilation.
#[derive(Debug, Clone)]
pub struct HandlerDef {
    /// Method name.
    pub ident: Ident,

    /// Verb attributes in declaration order.
    pub verbs: Vec<VerbDecl>,

    /// Method-level `#[logged_user]`.
    pub logged_user: Option<LoggedUser>
}

/// Check if `attr` is one of the verb attributes.
pub fn is_verb_attribute(attr: &Attribute) -> bool {
    attr.path()
        .get_ident()
        .is_some_and(|ident| HttpVerb::from_attribute(&ident.to_string()).is_some())
}

/// Parse a verb attribute, `None` when `attr` is something else.
pub fn parse_verb(attr: &Attribute) -> syn::Result<Option<VerbDecl>> {
    let Some(verb) = attr
        .path()
        .get_ident()
        .and_then(|ident| HttpVerb::from_attribute(&ident.to_string()))
    else {
        return Ok(None);
    };

    let path = match &attr.meta {
        syn::Meta::Path(_) => None,
        syn::Meta::List(_) => Some(attr.parse_args::<LitStr>()?.value()),
        syn::Meta::NameValue(_) => {
            return Err(syn::Error::new_spanned(
                attr,
                format!(
                    "expected #[{0}] or #[{0}(\"/path\")]",
                    verb.name()
                )
            ));
        }
    };

    Ok(Some(VerbDecl {
        verb,
        path,
        span: attr.span()
    }))
}

/// Parse the routing attributes of a method.
///
/// Returns `Ok(None)` for methods without verb attributes.
pub fn parse_handler(method: &ImplItemFn) -> syn::Result<Option<HandlerDef>> {
    let mut diagnostics = Diagnostics::new();
    let mut verbs = Vec::new();
    let mut logged_user = None;

    for attr in &method.attrs {
        if is_logged_user(attr) {
            if logged_user.is_some() {
                diagnostics.push(syn::Error::new_spanned(
                    attr,
                    "duplicate #[logged_user] attribute"
                ));
            }
            logged_user = diagnostics.take(parse_logged_user(attr));
        } else if let Some(verb) = diagnostics.take(parse_verb(attr)).flatten() {
            verbs.push(verb);
        }
    }

    if verbs.is_empty() {
        if let Some(user) = &logged_user {
            diagnostics.push(syn::Error::new(
                user.span,
                "#[logged_user] requires a verb attribute on the same method"
            ));
        }
        return diagnostics.finish(None);
    }

    if method.sig.receiver().is_none() {
        diagnostics.push(syn::Error::new_spanned(
            &method.sig,
            "handler methods must take `&self`"
        ));
    }

    diagnostics.finish(Some(HandlerDef {
        ident: method.sig.ident.clone(),
        verbs,
        logged_user
    }))
}

/// Remove verb and `#[logged_user]` attributes.
pub fn strip_routing_attributes(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !is_verb_attribute(attr) && !is_logged_user(attr));
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn bare_verb() {
        let decl = parse_verb(&parse_quote!(#[get])).unwrap().unwrap();
        assert_eq!(decl.verb, HttpVerb::Get);
        assert_eq!(decl.path, None);
    }

    #[test]
    fn verb_with_path() {
        let decl = parse_verb(&parse_quote!(#[delete("/{id}")])).unwrap().unwrap();
        assert_eq!(decl.verb, HttpVerb::Delete);
        assert_eq!(decl.path.as_deref(), Some("/{id}"));
    }

    #[test]
    fn other_attributes_are_ignored() {
        assert!(parse_verb(&parse_quote!(#[inline])).unwrap().is_none());
        assert!(parse_verb(&parse_quote!(#[doc = "x"])).unwrap().is_none());
    }

    #[test]
    fn verb_name_value_is_rejected() {
        assert!(parse_verb(&parse_quote!(#[post = "/x"])).is_err());
    }

    #[test]
    fn verb_with_non_string_is_rejected() {
        assert!(parse_verb(&parse_quote!(#[put(id)])).is_err());
    }

    #[test]
    fn handler_with_several_verbs() {
        let method: ImplItemFn = parse_quote! {
            #[get("/{id}")]
            #[delete("/{id}")]
            #[logged_user(allowed_roles("admin"))]
            fn task(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
                Ok(())
            }
        };
        let handler = parse_handler(&method).unwrap().unwrap();
        assert_eq!(handler.ident, "task");
        assert_eq!(handler.verbs.len(), 2);
        assert_eq!(handler.verbs[1].verb, HttpVerb::Delete);
        assert_eq!(
            handler.logged_user.unwrap().allowed_roles,
            vec!["admin".to_string()]
        );
    }

    #[test]
    fn plain_method_is_not_a_handler() {
        let method: ImplItemFn = parse_quote! {
            fn helper(&self) -> u8 { 1 }
        };
        assert!(parse_handler(&method).unwrap().is_none());
    }

    #[test]
    fn logged_user_without_verb() {
        let method: ImplItemFn = parse_quote! {
            #[logged_user]
            fn helper(&self) {}
        };
        let err = parse_handler(&method).unwrap_err();
        assert!(err.to_string().contains("requires a verb attribute"));
    }

    #[test]
    fn handler_needs_receiver() {
        let method: ImplItemFn = parse_quote! {
            #[get]
            fn index(request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
                Ok(())
            }
        };
        let err = parse_handler(&method).unwrap_err();
        assert!(err.to_string().contains("must take `&self`"));
    }

    #[test]
    fn stripping() {
        let mut method: ImplItemFn = parse_quote! {
            /// Docs stay.
            #[get]
            #[logged_user]
            #[inline]
            fn index(&self) {}
        };
        strip_routing_attributes(&mut method.attrs);
        assert_eq!(method.attrs.len(), 2);
        assert!(method.attrs.iter().all(|a| !is_verb_attribute(a)));
    }
}
