// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Stock interpreters for raw request values.
//!
//! Every function here fits [`ValueInterpreter`](crate::value::ValueInterpreter)
//! and can be handed to [`PathVariable`](crate::value::PathVariable) or
//! [`QueryParameter`](crate::value::QueryParameter) directly:
//!
//! ```rust
//! use barman_core::{interpret, value::PathVariable};
//!
//! static ID: PathVariable<i64> = PathVariable::new("id", interpret::parsed);
//! static TAGS: PathVariable<Vec<String>> = PathVariable::new("tags", interpret::as_string_list);
//! ```
//!
//! Failures carry a human-readable reason which the readers wrap into
//! [`Error::InvalidValue`](crate::Error::InvalidValue).

use std::{fmt::Display, str::FromStr};

use url::Url;

/// Outcome of interpreting one raw value.
pub type Interpretation<T> = std::result::Result<T, String>;

/// Raw value as is.
pub fn as_string(raw: &str) -> Interpretation<String> {
    Ok(raw.to_string())
}

/// Raw value without leading and trailing whitespace.
pub fn as_trimmed_string(raw: &str) -> Interpretation<String> {
    Ok(raw.trim().to_string())
}

/// Comma separated list.
///
/// Inner empty items are kept, trailing ones are dropped, so `"a,,b,"`
/// yields `["a", "", "b"]`.
pub fn as_string_list(raw: &str) -> Interpretation<Vec<String>> {
    let mut items: Vec<String> = raw.split(',').map(str::to_string).collect();
    while items.last().is_some_and(String::is_empty) {
        items.pop();
    }
    Ok(items)
}

/// Absolute URL.
pub fn as_url(raw: &str) -> Interpretation<Url> {
    Url::parse(raw).map_err(|e| format!("malformed URL: {e}"))
}

/// First character of the raw value.
pub fn as_char(raw: &str) -> Interpretation<char> {
    raw.chars()
        .next()
        .ok_or_else(|| "empty value has no first character".to_string())
}

/// Any [`FromStr`] type: numbers, `bool`, `char` and friends.
pub fn parsed<T>(raw: &str) -> Interpretation<T>
where
    T: FromStr,
    T::Err: Display
{
    raw.parse().map_err(|e: T::Err| e.to_string())
}
