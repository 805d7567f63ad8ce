// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Route table construction.
//!
//! Turns the handler list of an endpoint into ordered [`Route`]s:
//!
//! ```text
//! EndpointDef
//! │
//! ├── base path      explicit path, or prefix + lower-cased type name
//! │
//! └── for each handler, for each verb attribute
//!     ├── template       explicit, or naming convention
//!     ├── PathSpec       compiled template, regex validated
//!     ├── Authorization  method #[logged_user], else impl #[logged_user]
//!     └── Route          rejected when (verb, template) already exists
//! ```
//!
//! Routes are kept grouped by verb, each group in declaration order, which
//! is also the order the dispatcher probes them in.

use std::collections::{BTreeMap, HashMap};

use convert_case::{Case, Casing};
use syn::Ident;

use super::{
    parse::{EndpointDef, VerbDecl},
    path_spec::PathSpec,
    route::{Authorization, HttpVerb, Route}
};
use crate::utils::diagnostics::Diagnostics;

/// Handler names mapped to the endpoint root by convention.
const ROOT_HANDLERS: [&str; 4] = ["index", "save", "update", "delete"];

/// All routes of one endpoint.
#[derive(Debug)]
pub struct RouteTable {
    base_path: String,
    routes:    Vec<Route>
}

impl RouteTable {
    /// Build the table for a parsed endpoint.
    ///
    /// # Errors
    ///
    /// Duplicate routes, conflicting role requirements and malformed
    /// template regexes, all combined.
    pub fn build(def: &EndpointDef) -> syn::Result<Self> {
        let base_path = base_path(&def.ident, def.args.path.as_deref(), def.args.prefix());
        let mut diagnostics = Diagnostics::new();

        let default_authorization = match &def.logged_user {
            Some(user) => diagnostics.take(user.authorization()).unwrap_or_default(),
            None => Authorization::open()
        };

        let mut seen: HashMap<(HttpVerb, String), Ident> = HashMap::new();
        let mut by_verb: BTreeMap<HttpVerb, Vec<Route>> = BTreeMap::new();

        for handler in &def.handlers {
            let authorization = match &handler.logged_user {
                Some(user) => match diagnostics.take(user.authorization()) {
                    Some(authorization) => authorization,
                    None => continue
                },
                None => default_authorization.clone()
            };

            for decl in &handler.verbs {
                let template = handler_template(&handler.ident, decl.path.as_deref());

                if let Some(previous) = seen.get(&(decl.verb, template.clone())) {
                    diagnostics.push(syn::Error::new(
                        decl.span,
                        format!(
                            "duplicate route {} \"{}\": already declared by `{}`",
                            decl.verb.as_str(),
                            template,
                            previous
                        )
                    ));
                    continue;
                }
                seen.insert((decl.verb, template.clone()), handler.ident.clone());

                let spec = PathSpec::compile(make_uri(&base_path, &template), template);
                if let Err(err) = validate_regex(&spec, decl) {
                    diagnostics.push(err);
                    continue;
                }

                by_verb.entry(decl.verb).or_default().push(Route::new(
                    decl.verb,
                    spec,
                    handler.ident.clone(),
                    authorization.clone()
                ));
            }
        }

        diagnostics.finish(Self {
            base_path,
            routes: by_verb.into_values().flatten().collect()
        })
    }

    /// Servlet-style mapping for the whole endpoint.
    pub fn mapping(&self) -> String {
        make_uri(&self.base_path, "/*")
    }

    /// Every route, grouped by verb in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Routes answering `verb`, in declaration order.
    pub fn routes_for(&self, verb: HttpVerb) -> Vec<&Route> {
        self.routes.iter().filter(|route| route.verb == verb).collect()
    }

    /// One route per distinct non-index template, in table order.
    ///
    /// Each of them backs one shared runtime matcher.
    pub fn matchers(&self) -> Vec<&Route> {
        let mut distinct: Vec<&Route> = Vec::new();
        for route in self.routes.iter().filter(|route| !route.is_index()) {
            if !distinct.iter().any(|known| known.pattern == route.pattern) {
                distinct.push(route);
            }
        }
        distinct
    }
}

fn validate_regex(spec: &PathSpec, decl: &VerbDecl) -> syn::Result<()> {
    let Some(regex) = &spec.regex else {
        return Ok(());
    };
    regex::Regex::new(&format!("^(?:{regex})$"))
        .map(|_| ())
        .map_err(|err| {
            syn::Error::new(
                decl.span,
                format!("invalid path template \"{}\": {}", spec.template, err)
            )
        })
}

/// Base path of an endpoint.
///
/// An absolute `path` is used as is, a relative one is appended to
/// `prefix`. Without `path`, the type name is appended in flat case: word
/// boundaries are dropped, so `TaskList` and `Task_List` both mount at
/// `tasklist`.
pub fn base_path(ident: &Ident, path: Option<&str>, prefix: &str) -> String {
    match path {
        Some(path) if path.starts_with('/') => path.to_string(),
        Some(path) if !path.is_empty() => make_uri(prefix, path),
        _ => make_uri(prefix, &ident.to_string().to_case(Case::Flat))
    }
}

/// Template of a handler.
///
/// An explicit template gets a leading slash when it lacks one. Without
/// one, `index`, `save`, `update` and `delete` map to the endpoint root and
/// every other handler to `/name`.
pub fn handler_template(handler: &Ident, explicit: Option<&str>) -> String {
    match explicit {
        Some(path) if !path.is_empty() => {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        }
        _ => {
            let name = handler.to_string();
            let name = name.strip_prefix("r#").unwrap_or(&name);
            if ROOT_HANDLERS.contains(&name) {
                String::new()
            } else {
                format!("/{name}")
            }
        }
    }
}

/// Join two paths with exactly one slash at the join point.
///
/// An empty child yields the parent unchanged.
pub fn make_uri(parent: &str, child: &str) -> String {
    match (parent.ends_with('/'), child.strip_prefix('/')) {
        (true, Some(rest)) => format!("{parent}{rest}"),
        (false, Some(_)) => format!("{parent}{child}"),
        (true, None) => format!("{parent}{child}"),
        (false, None) if child.is_empty() => parent.to_string(),
        (false, None) => format!("{parent}/{child}")
    }
}
