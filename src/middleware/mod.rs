// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules.

pub mod current_user;

pub use current_user::{resolve_current_user, CurrentUser};
