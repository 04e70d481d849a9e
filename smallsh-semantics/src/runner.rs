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

//! Implementation of the read-eval loop

use crate::command::execute;
use crate::reaper::reap_completed;
use smallsh_env::Env;
use smallsh_env::System;
use smallsh_env::SystemEx as _;
use smallsh_env::input::FdReader;
use smallsh_env::semantics::Divert;
use smallsh_env::semantics::ExitStatus;
use smallsh_env::semantics::Result;
use smallsh_syntax::parser::MAX_LINE_LENGTH;
use smallsh_syntax::parser::parse_line;
use std::ops::ControlFlow::Break;

/// Prompt printed before reading each line
pub const PROMPT: &str = ": ";

/// Read-eval loop
///
/// Each iteration of the loop prints the [prompt](PROMPT), reads a line,
/// [parses](parse_line) and [executes](execute) the command in it, and then
/// [reports finished background jobs](reap_completed). Blank and comment
/// lines are not executed, but the jobs are still reaped. A line that cannot
/// be parsed is reported and skipped.
///
/// The loop ends when a command results in a `Break(Divert::...)`. Reaching
/// the end of input has the same effect as the `exit` built-in: all
/// background jobs are killed and the loop returns
/// `Break(Divert::Exit(ExitStatus::SUCCESS))`. If the input cannot be read,
/// the jobs are killed as well and the loop returns
/// `Break(Divert::Abort(ExitStatus::FAILURE))`.
///
/// # Example
///
/// ```
/// # use smallsh_env::Env;
/// # use smallsh_semantics::{Divert, ExitStatus};
/// # use smallsh_semantics::runner::ReadEvalLoop;
/// # use std::ops::ControlFlow::Break;
/// let mut env = Env::new_virtual();
/// env.system.set_stdin("# nothing to do\n");
/// let result = ReadEvalLoop::new(&mut env).run();
/// assert_eq!(result, Break(Divert::Exit(ExitStatus::SUCCESS)));
/// assert_eq!(env.system.stdout(), ": : ");
/// ```
#[derive(Debug)]
#[must_use = "the loop must be run"]
pub struct ReadEvalLoop<'a, S> {
    env: &'a mut Env<S>,
    reader: FdReader,
}

impl<'a, S: System> ReadEvalLoop<'a, S> {
    /// Creates a new read-eval loop that reads from the standard input.
    ///
    /// The reader keeps one byte more than [`MAX_LINE_LENGTH`] of each line,
    /// so an overlong line is still rejected by the parser.
    pub fn new(env: &'a mut Env<S>) -> Self {
        Self::with_reader(env, FdReader::default().with_limit(MAX_LINE_LENGTH + 1))
    }

    /// Creates a new read-eval loop with the given reader.
    pub fn with_reader(env: &'a mut Env<S>, reader: FdReader) -> Self {
        ReadEvalLoop { env, reader }
    }

    /// Runs the read-eval loop.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.env.system.print(PROMPT);

            let line = match self.reader.read_line(&mut self.env.system) {
                Ok(line) => line,
                Err(errno) => {
                    let message = format!("smallsh: cannot read input: {}\n", errno.desc());
                    self.env.system.print_error(&message);
                    self.env.kill_all_jobs();
                    return Break(Divert::Abort(ExitStatus::FAILURE));
                }
            };
            if line.is_empty() {
                tracing::debug!("end of input");
                self.env.kill_all_jobs();
                return Break(Divert::Exit(ExitStatus::SUCCESS));
            }

            match parse_line(&line) {
                Ok(Some(spec)) => execute(self.env, &spec)?,
                Ok(None) => (),
                Err(e) => self.env.system.print_error(&format!("smallsh: {e}\n")),
            }

            reap_completed(self.env);
        }
    }
}

/// Runs a [`ReadEvalLoop`] on the standard input.
pub fn read_eval_loop<S: System>(env: &mut Env<S>) -> Result<()> {
    ReadEvalLoop::new(env).run()
}
