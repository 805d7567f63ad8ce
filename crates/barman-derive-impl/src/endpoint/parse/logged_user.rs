// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[logged_user(...)]` parsing.
//!
//! ```rust,ignore
//! #[logged_user]                                    // any logged user
//! #[logged_user(allowed_roles("admin", "staff"))]   // one of these roles
//! #[logged_user(rejected_roles("guest"))]           // anyone but guests
//! #[logged_user(rejected_roles("*"))]               // anonymous requests only
//! ```
//!
//! Placed on a method it applies to that method alone. Placed on the `impl`
//! block it is the default for every method without its own.

use proc_macro2::Span;
use syn::{Attribute, LitStr, Token, punctuated::Punctuated, spanned::Spanned};

use crate::{
    endpoint::route::{ANY_ROLE, Authorization},
    utils::diagnostics::Diagnostics
};

/// Parsed `#[logged_user]` attribute.
#[derive(Debug, Clone)]
pub struct LoggedUser {
    /// Roles allowed to call the handler.
    pub allowed_roles: Vec<String>,

    /// Roles rejected by the handler.
    pub rejected_roles: Vec<String>,

    /// Span of the attribute, for diagnostics.
    pub span: Span
}

impl LoggedUser {
    /// Resolve into an [`Authorization`].
    ///
    /// # Errors
    ///
    /// When both a logged and an anonymous user are demanded.
    pub fn authorization(&self) -> syn::Result<Authorization> {
        Authorization::from_roles(
            self.allowed_roles.clone(),
            self.rejected_roles.clone(),
            self.span
        )
    }
}

/// Check if `attr` is `#[logged_user]`.
pub fn is_logged_user(attr: &Attribute) -> bool {
    attr.path().is_ident("logged_user")
}

/// Parse a `#[logged_user]` attribute.
///
/// A bare `#[logged_user]` allows any logged user.
pub fn parse_logged_user(attr: &Attribute) -> syn::Result<LoggedUser> {
    let span = attr.span();

    let list = match &attr.meta {
        syn::Meta::Path(_) => {
            return Ok(LoggedUser {
                allowed_roles: vec![ANY_ROLE.to_string()],
                rejected_roles: Vec::new(),
                span
            });
        }
        syn::Meta::List(list) => list,
        syn::Meta::NameValue(_) => {
            return Err(syn::Error::new_spanned(
                attr,
                "logged_user must use parentheses: logged_user(allowed_roles(\"...\"))"
            ));
        }
    };

    let mut allowed_roles = Vec::new();
    let mut rejected_roles = Vec::new();

    list.parse_nested_meta(|nested| {
        let ident = nested
            .path
            .get_ident()
            .ok_or_else(|| syn::Error::new_spanned(&nested.path, "expected identifier"))?;
        let ident_str = ident.to_string();

        let target = match ident_str.as_str() {
            "allowed_roles" => &mut allowed_roles,
            "rejected_roles" => &mut rejected_roles,
            _ => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!(
                        "unknown logged_user option '{}', expected: allowed_roles, rejected_roles",
                        ident_str
                    )
                ));
            }
        };

        let content;
        syn::parenthesized!(content in nested.input);
        let roles = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
        *target = validate_roles(&ident_str, roles.into_iter().collect())?;
        Ok(())
    })?;

    Ok(LoggedUser {
        allowed_roles,
        rejected_roles,
        span
    })
}

/// Reject blank role names and a wildcard mixed with named roles.
fn validate_roles(option: &str, roles: Vec<LitStr>) -> syn::Result<Vec<String>> {
    let mut diagnostics = Diagnostics::new();

    for role in &roles {
        if role.value().trim().is_empty() {
            diagnostics.push(syn::Error::new(
                role.span(),
                format!("{option} must not contain empty role names")
            ));
        }
    }

    if roles.len() > 1
        && let Some(wildcard) = roles.iter().find(|r| r.value() == ANY_ROLE)
    {
        diagnostics.push(syn::Error::new(
            wildcard.span(),
            format!("{option}: wildcard \"*\" cannot be combined with other roles")
        ));
    }

    diagnostics.finish(roles.iter().map(LitStr::value).collect())
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn parse(attr: Attribute) -> syn::Result<LoggedUser> {
        parse_logged_user(&attr)
    }

    #[test]
    fn bare_attribute_allows_any_logged_user() {
        let user = parse(parse_quote!(#[logged_user])).unwrap();
        assert_eq!(user.allowed_roles, vec!["*"]);
        assert!(user.rejected_roles.is_empty());
        assert!(user.authorization().unwrap().requires_logged_user);
    }

    #[test]
    fn allowed_roles() {
        let user = parse(parse_quote!(#[logged_user(allowed_roles("admin", "staff"))])).unwrap();
        assert_eq!(user.allowed_roles, vec!["admin", "staff"]);
    }

    #[test]
    fn rejected_wildcard() {
        let user = parse(parse_quote!(#[logged_user(rejected_roles("*"))])).unwrap();
        let auth = user.authorization().unwrap();
        assert!(auth.requires_anonymous);
        assert!(!auth.requires_logged_user);
    }

    #[test]
    fn both_lists() {
        let user = parse(parse_quote!(
            #[logged_user(allowed_roles("admin"), rejected_roles("banned", "guest"))]
        ))
        .unwrap();
        assert_eq!(user.allowed_roles, vec!["admin"]);
        assert_eq!(user.rejected_roles, vec!["banned", "guest"]);
    }

    #[test]
    fn conflicting_requirements() {
        let user =
            parse(parse_quote!(#[logged_user(allowed_roles("a"), rejected_roles("*"))])).unwrap();
        assert!(user.authorization().is_err());
    }

    #[test]
    fn wildcard_mixed_with_roles() {
        let err = parse(parse_quote!(#[logged_user(allowed_roles("*", "admin"))])).unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn empty_role_name() {
        let err = parse(parse_quote!(#[logged_user(rejected_roles(" "))])).unwrap_err();
        assert!(err.to_string().contains("empty role names"));
    }

    #[test]
    fn unknown_option() {
        let err = parse(parse_quote!(#[logged_user(roles("a"))])).unwrap_err();
        assert!(err.to_string().contains("unknown logged_user option 'roles'"));
    }

    #[test]
    fn name_value_form() {
        assert!(parse(parse_quote!(#[logged_user = "admin"])).is_err());
    }

    #[test]
    fn recognizes_attribute() {
        assert!(is_logged_user(&parse_quote!(#[logged_user])));
        assert!(!is_logged_user(&parse_quote!(#[get])));
    }
}
