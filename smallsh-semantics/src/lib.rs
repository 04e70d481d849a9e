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

//! Implementation of the shell language semantics
//!
//! This crate executes commands parsed by `smallsh_syntax` in an environment
//! defined by `smallsh_env`:
//!
//! - [`command::execute`] dispatches a command to a built-in or to
//!   [`external::execute_external`], which runs an external utility in a
//!   child process in the foreground or background.
//! - [`redir`] rebinds the standard input and output of the child before the
//!   utility is executed.
//! - [`reaper::reap_completed`] reports and forgets background jobs that have
//!   finished.
//! - [`runner::read_eval_loop`] ties them together: it prompts, reads a line,
//!   executes it, and reaps finished jobs until the shell exits.

pub mod command;
pub mod external;
pub mod reaper;
pub mod redir;
pub mod runner;

#[doc(no_inline)]
pub use smallsh_env::semantics::{Divert, ExitStatus, Result};
