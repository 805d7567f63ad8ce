// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error accumulation.
//!
//! Every configuration problem of an endpoint is reported in one expansion
//! instead of one per compile cycle. Errors are folded with
//! [`syn::Error::combine`] and rendered together by `to_compile_error()`.

/// Collects spanned errors.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Option<syn::Error>
}

impl Diagnostics {
    /// Empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one error.
    pub fn push(&mut self, err: syn::Error) {
        if let Some(existing) = &mut self.errors {
            existing.combine(err);
        } else {
            self.errors = Some(err);
        }
    }

    /// Keep the value of `result`, recording its error otherwise.
    pub fn take<T>(&mut self, result: syn::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// `Err` with every recorded error, or `Ok(value)`.
    pub fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.errors {
            Some(err) => Err(err),
            None => Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use proc_macro2::Span;

    use super::*;

    #[test]
    fn empty_finishes_ok() {
        let diagnostics = Diagnostics::new();
        assert_eq!(diagnostics.finish(7).unwrap(), 7);
    }

    #[test]
    fn errors_are_combined() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(syn::Error::new(Span::call_site(), "first"));
        let kept: Option<u8> = diagnostics.take(Err(syn::Error::new(Span::call_site(), "second")));
        assert!(kept.is_none());
        assert_eq!(diagnostics.take(Ok(3)), Some(3));

        let err = diagnostics.finish(()).unwrap_err();
        let messages: Vec<String> = err.into_iter().map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
