// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed readers for path variables and query parameters.
//!
//! Readers are declared once, usually as `static` items next to the
//! handlers that use them, and applied to each request:
//!
//! ```rust
//! use barman_core::{
//!     http::Verb,
//!     interpret,
//!     memory::MemoryRequest,
//!     value::{PathVariable, QueryParameter}
//! };
//!
//! static ID: PathVariable<i64> = PathVariable::new("id", interpret::parsed);
//! static PAGE: QueryParameter<u32> = QueryParameter::with_default("page", interpret::parsed, 1);
//!
//! let request = MemoryRequest::new(Verb::Get).with_attribute("id", "7");
//! assert_eq!(ID.get(&request).unwrap(), 7);
//! assert_eq!(PAGE.get(&request).unwrap(), 1);
//! ```
//!
//! Path variables are written into request attributes by the matcher that
//! accepted the request, so a [`PathVariable`] only sees values once routing
//! has happened.

use crate::{
    error::{Error, Result},
    http::Request,
    interpret::Interpretation
};

/// Conversion from a raw request value.
pub type ValueInterpreter<T> = fn(&str) -> Interpretation<T>;

fn not_defined(name: &str, request: &dyn Request) -> Error {
    Error::ValueNotDefined {
        name: name.to_string(),
        verb: request.verb(),
        path: request.path_info().map(str::to_string)
    }
}

fn interpret<T>(name: &str, raw: &str, interpreter: ValueInterpreter<T>) -> Result<T> {
    interpreter(raw).map_err(|reason| Error::InvalidValue {
        name:  name.to_string(),
        value: raw.to_string(),
        reason
    })
}

/// Variable segment of a parameterized path.
#[derive(Debug, Clone, Copy)]
pub struct PathVariable<T> {
    name:        &'static str,
    interpreter: ValueInterpreter<T>
}

impl<T> PathVariable<T> {
    /// Reader for the variable `name`.
    pub const fn new(name: &'static str, interpreter: ValueInterpreter<T>) -> Self {
        Self {
            name,
            interpreter
        }
    }

    /// Variable name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Check if the request carries this variable.
    pub fn is_defined_at(&self, request: &dyn Request) -> bool {
        request.attribute(self.name).is_some()
    }

    /// Interpreted value.
    ///
    /// # Errors
    ///
    /// - [`Error::ValueNotDefined`] when no matcher captured the variable
    /// - [`Error::InvalidValue`] when the interpreter rejects it
    pub fn get(&self, request: &dyn Request) -> Result<T> {
        match request.attribute(self.name) {
            Some(raw) => interpret(self.name, raw, self.interpreter),
            None => Err(not_defined(self.name, request))
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Fallback<T> {
    Required,
    Constant(T),
    Supplied(fn() -> T)
}

/// Query parameter, required or with a default.
#[derive(Debug, Clone, Copy)]
pub struct QueryParameter<T> {
    name:        &'static str,
    interpreter: ValueInterpreter<T>,
    fallback:    Fallback<T>
}

impl<T> QueryParameter<T> {
    /// Parameter that must be present.
    pub const fn required(name: &'static str, interpreter: ValueInterpreter<T>) -> Self {
        Self {
            name,
            interpreter,
            fallback: Fallback::Required
        }
    }

    /// Parameter that falls back to `default` when absent.
    pub const fn with_default(
        name: &'static str,
        interpreter: ValueInterpreter<T>,
        default: T
    ) -> Self {
        Self {
            name,
            interpreter,
            fallback: Fallback::Constant(default)
        }
    }

    /// Parameter that falls back to `supplier()` when absent.
    pub const fn with_supplied_default(
        name: &'static str,
        interpreter: ValueInterpreter<T>,
        supplier: fn() -> T
    ) -> Self {
        Self {
            name,
            interpreter,
            fallback: Fallback::Supplied(supplier)
        }
    }

    /// Parameter name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Check if reading fails when the parameter is absent.
    pub const fn is_required(&self) -> bool {
        matches!(self.fallback, Fallback::Required)
    }

    /// Check if the request carries this parameter.
    pub fn is_defined_at(&self, request: &dyn Request) -> bool {
        request.parameter(self.name).is_some()
    }
}

impl<T: Clone> QueryParameter<T> {
    /// Interpreted value, or the fallback when the parameter is absent.
    ///
    /// A present value is always interpreted, even when a default exists.
    ///
    /// # Errors
    ///
    /// - [`Error::ValueNotDefined`] when a required parameter is absent
    /// - [`Error::InvalidValue`] when the interpreter rejects the value
    pub fn get(&self, request: &dyn Request) -> Result<T> {
        if let Some(raw) = request.parameter(self.name) {
            return interpret(self.name, raw, self.interpreter);
        }
        match &self.fallback {
            Fallback::Required => Err(not_defined(self.name, request)),
            Fallback::Constant(value) => Ok(value.clone()),
            Fallback::Supplied(supplier) => Ok(supplier())
        }
    }
}
