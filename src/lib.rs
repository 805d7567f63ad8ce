// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # barman
//!
//! One crate, all features. Re-exports:
//! - [`endpoint`](macro@endpoint) attribute macro from `barman-derive-impl`
//! - All runtime types from `barman-core` ([`Router`](router::Router),
//!   [`Endpoint`](router::Endpoint), [`Path`](path::Path),
//!   [`PathVariable`](value::PathVariable))
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use barman::prelude::*;
//!
//! static TASK_ID: PathVariable<u64> = PathVariable::new("id", barman::interpret::parsed);
//!
//! #[endpoint(path = "tasks")]
//! impl Tasks {
//!     #[get("/{id: :digit:+}")]
//!     fn task(&self, request: &mut dyn Request, response: &mut dyn Response) -> Result<()> {
//!         let id = TASK_ID.get(request)?;
//!         barman::response::write_text(response, &format!("task {id}"))
//!     }
//! }
//!
//! // Any server adapter: hand the request to the generated router.
//! Tasks.dispatch(&mut request, &mut response)?;
//! ```

pub use barman_core::*;
pub use barman_derive_impl::endpoint;

/// Convenient re-exports, the macro included.
pub mod prelude {
    pub use barman_core::prelude::*;
    pub use barman_derive_impl::endpoint;
}
