// This file is part of smallsh, a small POSIX-style shell with job control.
// Copyright (C) 2026 smallsh developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Type definitions for built-in utilities.
//!
//! This module provides data types for defining built-in utilities.
//!
//! Note that concrete implementations of built-ins are not included in the
//! `smallsh_env` crate. For implementations of specific built-ins like `cd`
//! and `exit`, see the `smallsh_builtin` crate.

use crate::Env;
use crate::semantics::Result;
use std::fmt::Debug;

/// Type of functions that implement the behavior of a built-in.
///
/// The function receives the command words following the built-in name.
/// Built-ins run in the shell process and do not change the
/// [`ForegroundStatus`](crate::status::ForegroundStatus).
pub type Main<S> = fn(&mut Env<S>, Vec<String>) -> Result;

/// Built-in utility definition.
pub struct Builtin<S> {
    /// Function that implements the behavior of the built-in.
    pub execute: Main<S>,
}

// Not derived because the derive would require `S: Clone`.
impl<S> Clone for Builtin<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Builtin<S> {}

impl<S> Debug for Builtin<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin").finish_non_exhaustive()
    }
}
