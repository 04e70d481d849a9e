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

//! Command execution

use crate::external::execute_external;
use smallsh_env::Env;
use smallsh_env::System;
use smallsh_env::semantics::Result;
use smallsh_syntax::syntax::CommandSpec;

/// Executes a command.
///
/// If the program name is that of a built-in in `env.builtins`, the built-in
/// runs in the shell process with the remaining words as its arguments. The
/// redirections and the background request of the command are ignored for
/// built-ins. Any other command is [executed as an external
/// utility](execute_external).
pub fn execute<S: System>(env: &mut Env<S>, spec: &CommandSpec) -> Result {
    if let Some(builtin) = env.builtins.get(spec.program()).copied() {
        tracing::debug!(name = spec.program(), "running built-in");
        let args = spec.args().to_vec();
        return (builtin.execute)(env, args);
    }
    execute_external(env, spec)
}
