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

//! Cd built-in
//!
//! The **`cd`** built-in changes the working directory.
//!
//! # Synopsis
//!
//! ```sh
//! cd [directory]
//! ```
//!
//! # Description
//!
//! The built-in changes the working directory of the shell to the specified
//! directory. If the operand is omitted, the value of `$HOME` is used.
//! The operand is used as is: it is neither searched for in `$CDPATH` nor
//! canonicalized.
//!
//! On success, the built-in prints the new working directory followed by a
//! newline to the standard output.
//!
//! # Operands
//!
//! The built-in takes at most one operand that specifies the directory to
//! change to.
//!
//! # Errors
//!
//! This built-in fails if the working directory cannot be changed, for
//! example, in the following cases:
//!
//! - The operand does not resolve to an existing accessible directory.
//! - The operand is omitted and `$HOME` is not set or empty.
//! - More than one operand is given.
//!
//! On failure, the built-in prints `cd failed` to the standard output and the
//! working directory remains unchanged.

use smallsh_env::Env;
use smallsh_env::System;
use smallsh_env::SystemEx as _;
use smallsh_env::semantics::Result;
use smallsh_env::system::Errno;
use std::ffi::CString;
use std::ops::ControlFlow::Continue;
use std::path::PathBuf;

/// Message printed when the working directory cannot be changed
pub const FAILURE_MESSAGE: &str = "cd failed\n";

/// Determines the directory to change to.
///
/// Returns `None` if the operands do not specify a usable directory.
fn target<S: System>(env: &Env<S>, args: Vec<String>) -> Option<String> {
    let mut args = args.into_iter();
    let operand = args.next();
    if args.next().is_some() {
        tracing::debug!("too many operands to cd");
        return None;
    }
    match operand {
        Some(operand) => Some(operand),
        None => env.system.env_var("HOME").filter(|home| !home.is_empty()),
    }
}

/// Changes the working directory and returns the new one.
fn change_directory<S: System>(system: &mut S, path: String) -> std::result::Result<PathBuf, Errno> {
    let path = CString::new(path).map_err(|_| Errno::EINVAL)?;
    system.chdir(&path)?;
    system.getcwd()
}

/// Entry point for executing the `cd` built-in
pub fn main<S: System>(env: &mut Env<S>, args: Vec<String>) -> Result {
    let Some(path) = target(env, args) else {
        env.system.print(FAILURE_MESSAGE);
        return Continue(());
    };

    match change_directory(&mut env.system, path) {
        Ok(cwd) => {
            let message = format!("{}\n", cwd.display());
            env.system.print(&message);
        }
        Err(errno) => {
            tracing::debug!(%errno, "cannot change working directory");
            env.system.print(FAILURE_MESSAGE);
        }
    }
    Continue(())
}
