// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[endpoint(...)]` arguments.
//!
//! | Option | Syntax | Default |
//! |--------|--------|---------|
//! | `path` | `path = "tasks"` or `path = "/v1/tasks"` | lower-cased type name |
//! | `admin` | `admin` | `/api` prefix |
//! | `environment` | `environment = "production"` | `BARMAN_ENVIRONMENT` variable |
//!
//! Relative paths are appended to the kind prefix, `/api` for ordinary
//! endpoints and `/admin` for admin ones. Absolute paths are used as is.

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;

/// Which environment the dispatcher is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Development: responses carry permissive CORS headers.
    #[default]
    Development,

    /// Production.
    Production
}

/// Variable read when `environment` is not given.
pub const ENVIRONMENT_VARIABLE: &str = "BARMAN_ENVIRONMENT";

impl Environment {
    /// Environment named by a configuration setting.
    ///
    /// Only `"production"` selects [`Environment::Production`]; anything
    /// else, including no setting at all, means development.
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            Some("production") => Self::Production,
            _ => Self::Development
        }
    }

    /// Environment named by the [`ENVIRONMENT_VARIABLE`] of the compiler.
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(ENVIRONMENT_VARIABLE).ok().as_deref())
    }

    /// Check if this is the development environment.
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromMeta for Environment {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Arguments of the `#[endpoint]` attribute.
#[derive(Debug, Default, FromMeta)]
pub struct EndpointArgs {
    /// Base path, relative to the kind prefix unless absolute.
    #[darling(default)]
    pub path: Option<String>,

    /// Mount under `/admin` instead of `/api`.
    #[darling(default)]
    pub admin: bool,

    /// Target environment.
    #[darling(default)]
    pub environment: Option<Environment>
}

impl EndpointArgs {
    /// Parse the attribute argument tokens.
    pub fn parse(tokens: TokenStream) -> darling::Result<Self> {
        let items = NestedMeta::parse_meta_list(tokens)?;
        Self::from_list(&items)
    }

    /// Explicit environment, else the one named by the compiler environment.
    pub fn environment(&self) -> Environment {
        self.environment.unwrap_or_else(Environment::from_env)
    }

    /// Kind prefix of the base path.
    pub const fn prefix(&self) -> &'static str {
        if self.admin { "/admin" } else { "/api" }
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    #[test]
    fn empty_arguments() {
        let args = EndpointArgs::parse(TokenStream::new()).unwrap();
        assert_eq!(args.path, None);
        assert!(!args.admin);
        assert_eq!(args.environment, None);
        assert_eq!(args.prefix(), "/api");
    }

    #[test]
    fn all_arguments() {
        let args =
            EndpointArgs::parse(quote!(path = "/v1/tasks", admin, environment = "production"))
                .unwrap();
        assert_eq!(args.path.as_deref(), Some("/v1/tasks"));
        assert!(args.admin);
        assert_eq!(args.prefix(), "/admin");
        assert_eq!(args.environment(), Environment::Production);
    }

    #[test]
    fn explicit_development() {
        let args = EndpointArgs::parse(quote!(environment = "Development")).unwrap();
        assert!(args.environment().is_development());
    }

    #[test]
    fn unknown_environment() {
        assert!(EndpointArgs::parse(quote!(environment = "staging")).is_err());
    }

    #[test]
    fn unknown_option() {
        assert!(EndpointArgs::parse(quote!(table = "tasks")).is_err());
    }

    #[test]
    fn environment_settings() {
        assert_eq!(
            Environment::from_setting(Some("production")),
            Environment::Production
        );
        assert_eq!(
            Environment::from_setting(Some("Production")),
            Environment::Development
        );
        assert_eq!(Environment::from_setting(None), Environment::Development);
        assert_eq!(Environment::default(), Environment::Development);
    }
}
