// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for the endpoint macro.
//!
//! # Submodules
//!
//! - [`diagnostics`]: accumulation of spanned errors

pub mod diagnostics;
