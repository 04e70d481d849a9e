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

//! Status built-in
//!
//! The **`status`** built-in prints the result of the last foreground
//! command.
//!
//! # Syntax
//!
//! ```sh
//! status
//! ```
//!
//! # Semantics
//!
//! The built-in prints `exit value N` if the last foreground process exited
//! with status *N*, or `terminated by signal N` if it was terminated by
//! signal number *N*. Built-ins are not foreground processes, so running
//! `status` twice prints the same result. Before any foreground process has
//! run, the built-in prints `exit value 0`.
//!
//! # Operands
//!
//! None. Any operands are ignored.
//!
//! # Exit status
//!
//! The built-in does not change the recorded result.

use smallsh_env::Env;
use smallsh_env::System;
use smallsh_env::SystemEx as _;
use smallsh_env::semantics::Result;
use std::ops::ControlFlow::Continue;

/// Entry point for executing the `status` built-in
pub fn main<S: System>(env: &mut Env<S>, _args: Vec<String>) -> Result {
    let message = format!("{}\n", env.foreground.result());
    env.system.print(&message);
    Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallsh_env::job::ProcessResult;
    use smallsh_env::job::Signal;

    #[test]
    fn status_before_any_foreground_process() {
        let mut env = Env::new_virtual();
        let result = main(&mut env, vec![]);
        assert_eq!(result, Continue(()));
        assert_eq!(env.system.stdout(), "exit value 0\n");
    }

    #[test]
    fn status_after_exit() {
        let mut env = Env::new_virtual();
        let pid = env.system.spawn_dummy();
        env.foreground.record(pid, ProcessResult::exited(1));

        _ = main(&mut env, vec![]);
        assert_eq!(env.system.stdout(), "exit value 1\n");
    }

    #[test]
    fn status_after_signal() {
        let mut env = Env::new_virtual();
        let pid = env.system.spawn_dummy();
        let result = ProcessResult::Signaled {
            signal: Signal::SIGINT,
            core_dump: false,
        };
        env.foreground.record(pid, result);

        _ = main(&mut env, vec![]);
        _ = main(&mut env, vec![]);
        assert_eq!(
            env.system.stdout(),
            "terminated by signal 2\nterminated by signal 2\n"
        );
    }
}
