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

//! Implementation of the shell built-in utilities.
//!
//! Each built-in utility is implemented in the submodule named after the
//! utility. The submodule contains the `main` function that implements the
//! built-in utility. The module documentation for each submodule describes
//! the behavior of the built-in utility.
//!
//! Built-ins run in the shell process itself. They receive the words that
//! follow the built-in name and ignore any redirections and background
//! request in the command line.

pub mod cd;
pub mod exit;
pub mod status;

use smallsh_env::Env;
use smallsh_env::System;
#[doc(no_inline)]
pub use smallsh_env::builtin::Builtin;

/// Returns the table of all the built-ins provided by this crate.
///
/// The table is sorted by the built-in name.
#[must_use]
pub fn builtins<S: System>() -> [(&'static str, Builtin<S>); 3] {
    [
        ("cd", Builtin { execute: cd::main }),
        ("exit", Builtin { execute: exit::main }),
        ("status", Builtin { execute: status::main }),
    ]
}

/// Adds all the [built-ins](builtins) to the environment.
pub fn install<S: System>(env: &mut Env<S>) {
    env.builtins.extend(builtins());
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallsh_env::VirtualSystem;

    #[test]
    fn builtins_are_sorted() {
        let names = builtins::<VirtualSystem>().map(|(name, _)| name);
        let mut sorted = names;
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn install_registers_every_builtin() {
        let mut env = Env::new_virtual();
        install(&mut env);
        let mut names = env.builtins.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        assert_eq!(names, ["cd", "exit", "status"]);
    }
}
