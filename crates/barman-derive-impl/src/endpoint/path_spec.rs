// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Path template compilation.
//!
//! A handler template is a literal path with optional variable segments:
//!
//! ```text
//! Template                         Regex                               Parameters
//! ──────────────────────────────────────────────────────────────────────────────
//! /login                           (none, static)                      []
//! /{id}                            /(?<id>[^/]+)                       [id]
//! /users/{name: [a-zA-Z]+}         /users/(?<name>[a-zA-Z]+)           [name]
//! /{id: :digit:+}/tags/{tag}       /(?<id>[0-9]+)/tags/(?<tag>[^/]+)   [id, tag]
//! ```
//!
//! A variable is `{name}` or `{name: custom}`, where the custom regex starts
//! after a colon and one whitespace character and runs to the first closing
//! brace. Text outside variables is copied into the regex untouched, so
//! template authors escape regex metacharacters themselves.
//!
//! Compilation never fails. Malformed custom regexes are reported by the
//! route table, which knows where the template was declared.

use std::{
    hash::{Hash, Hasher},
    sync::LazyLock
};

use regex::{Captures, Regex};

/// Variable placeholder: name in group 1, optional custom regex in group 3.
static VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(.*?)(:\s(.*?))?\}").expect("variable placeholder regex is valid")
});

/// Regex for a variable without a custom pattern: one path segment.
const DEFAULT_SEGMENT: &str = "[^/]+";

/// POSIX character class shorthands accepted inside custom patterns.
const POSIX_CLASSES: [(&str, &str); 5] = [
    (":alnum:", "[0-9A-Za-z]"),
    (":alpha:", r"\p{L}"),
    (":ascii:", r"[\x00-\x7F]"),
    (":digit:", "[0-9]"),
    (":xdigit:", "[0-9A-Fa-f]")
];

/// Compiled handler template.
#[derive(Debug, Clone)]
pub struct PathSpec {
    /// Mounted URI, the endpoint base joined with the template.
    pub raw_path: String,

    /// Handler template as declared.
    pub template: String,

    /// Unanchored regex with one named group per parameter.
    ///
    /// `None` for static templates.
    pub regex: Option<String>,

    /// Variable names in template order, duplicates kept.
    pub parameters: Vec<String>
}

impl PathSpec {
    /// Compile `template`, mounted at `raw_path`.
    pub fn compile(raw_path: impl Into<String>, template: impl Into<String>) -> Self {
        let template = template.into();
        let parameters: Vec<String> = VARIABLE
            .captures_iter(&template)
            .map(|caps| caps[1].to_string())
            .collect();

        let regex = if parameters.is_empty() {
            None
        } else {
            let replaced = VARIABLE.replace_all(&template, |caps: &Captures<'_>| {
                let pattern = match caps.get(3) {
                    Some(custom) => replace_posix_classes(custom.as_str()),
                    None => DEFAULT_SEGMENT.to_string()
                };
                format!("(?<{}>{})", &caps[1], pattern)
            });
            Some(replaced.into_owned())
        };

        Self {
            raw_path: raw_path.into(),
            template,
            regex,
            parameters
        }
    }
}

impl PartialEq for PathSpec {
    fn eq(&self, other: &Self) -> bool {
        self.template == other.template
    }
}

impl Eq for PathSpec {}

impl Hash for PathSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.template.hash(state);
    }
}

/// Replace POSIX class shorthands with `regex` crate syntax.
pub fn replace_posix_classes(pattern: &str) -> String {
    POSIX_CLASSES
        .iter()
        .fold(pattern.to_string(), |acc, (posix, class)| {
            acc.replace(posix, class)
        })
}
