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

//! Exit built-in
//!
//! The **`exit`** built-in causes the shell to exit.
//!
//! # Syntax
//!
//! ```sh
//! exit
//! ```
//!
//! # Semantics
//!
//! The built-in sends `SIGKILL` to every background job the shell is
//! tracking and then makes the shell exit. Jobs that have already terminated
//! are skipped silently.
//!
//! # Operands
//!
//! None. Any operands are ignored.
//!
//! # Exit status
//!
//! The shell exits with status 0.
//!
//! # Implementation notes
//!
//! This implementation of the built-in does not actually exit the shell, but
//! returns a [`Result`] having a [`Divert::Exit`]. The caller is responsible
//! for handling the divert value and exiting the process.

use smallsh_env::Env;
use smallsh_env::System;
use smallsh_env::semantics::Divert;
use smallsh_env::semantics::ExitStatus;
use smallsh_env::semantics::Result;
use std::ops::ControlFlow::Break;

/// Entry point for executing the `exit` built-in
pub fn main<S: System>(env: &mut Env<S>, args: Vec<String>) -> Result {
    if !args.is_empty() {
        tracing::debug!(?args, "ignoring operands to exit");
    }
    env.kill_all_jobs();
    Break(Divert::Exit(ExitStatus::SUCCESS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallsh_env::job::ProcessResult;
    use smallsh_env::job::Signal;

    #[test]
    fn exit_without_jobs() {
        let mut env = Env::new_virtual();
        let result = main(&mut env, vec![]);
        assert_eq!(result, Break(Divert::Exit(ExitStatus::SUCCESS)));
        assert_eq!(env.system.stdout(), "");
    }

    #[test]
    fn exit_kills_running_jobs() {
        let mut env = Env::new_virtual();
        let pid = env.system.spawn_dummy();
        env.jobs.register(pid).unwrap();

        let result = main(&mut env, vec![]);
        assert_eq!(result, Break(Divert::Exit(ExitStatus::SUCCESS)));
        assert!(env.jobs.is_empty());
        assert_eq!(
            env.system.state.borrow().signals_sent,
            [(pid, Signal::SIGKILL)]
        );
    }

    #[test]
    fn exit_status_ignores_last_foreground_result() {
        let mut env = Env::new_virtual();
        let pid = env.system.spawn_dummy();
        env.foreground.record(pid, ProcessResult::exited(5));

        let result = main(&mut env, vec!["3".to_string()]);
        assert_eq!(result, Break(Divert::Exit(ExitStatus::SUCCESS)));
    }
}
