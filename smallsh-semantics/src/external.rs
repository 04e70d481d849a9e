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

//! Execution of external utilities
//!
//! [`execute_external`] runs a command that is not a built-in in a new child
//! process. The child sets up its signal dispositions for its [`Role`],
//! performs the [redirections](crate::redir), and replaces itself with the
//! utility found by searching `$PATH`.
//!
//! The parent either waits for a foreground child and records its result in
//! [`Env::foreground`], or announces a background child and adds it to
//! [`Env::jobs`]. A background request is honored only while the
//! foreground-only mode is off.

use crate::redir::RedirectError;
use crate::redir::Redirections;
use smallsh_env::Env;
use smallsh_env::System;
use smallsh_env::SystemEx as _;
use smallsh_env::job::Pid;
use smallsh_env::semantics::Divert;
use smallsh_env::semantics::ExitStatus;
use smallsh_env::semantics::Result;
use smallsh_env::signal::Role;
use smallsh_env::signal::apply_dispositions;
use smallsh_env::system::Errno;
use smallsh_env::system::ForkResult;
use smallsh_syntax::syntax::CommandSpec;
use std::ffi::CString;
use std::ffi::NulError;
use std::ops::ControlFlow::{Break, Continue};
use thiserror::Error;

/// Command converted to the form passed to `execvp`
///
/// All conversions that may fail or allocate are done before forking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PreparedCommand {
    /// Name of the utility to search for
    pub file: CString,
    /// Arguments including the utility name
    pub args: Vec<CString>,
    /// Redirections performed in the child
    pub redirections: Redirections,
}

impl PreparedCommand {
    /// Converts a command.
    ///
    /// The command must have at least one word. Fails if any word or path
    /// contains a nul byte.
    pub fn new(spec: &CommandSpec) -> std::result::Result<Self, NulError> {
        let args = spec
            .program_and_args
            .iter()
            .map(|word| CString::new(word.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let file = args.first().cloned().unwrap_or_default();
        let redirections = Redirections::from_spec(spec)?;
        Ok(PreparedCommand {
            file,
            args,
            redirections,
        })
    }
}

/// Error that prevents a child process from executing the utility
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ChildError {
    /// The signal dispositions could not be set up.
    #[error("cannot set up signal handling: {}", .0.desc())]
    Signal(Errno),

    /// A redirection failed.
    #[error(transparent)]
    Redirect(#[from] RedirectError),

    /// The utility could not be executed.
    #[error("{}: {}", .program.to_string_lossy(), .errno.desc())]
    Exec { program: CString, errno: Errno },
}

/// Performs the steps of the child process up to executing the utility.
///
/// This function returns only if a step fails. On success, the process image
/// is replaced and the function never returns.
pub fn run_in_child<S: System + ?Sized>(
    system: &mut S,
    command: &PreparedCommand,
    role: Role,
) -> ChildError {
    if let Err(errno) = apply_dispositions(system, role) {
        return ChildError::Signal(errno);
    }
    if let Err(e) = command.redirections.apply(system) {
        return e.into();
    }
    match system.execvp(&command.file, &command.args) {
        Ok(never) => match never {},
        Err(errno) => ChildError::Exec {
            program: command.file.clone(),
            errno,
        },
    }
}

/// Reports the error and terminates the child process.
fn exit_child<S: System + ?Sized>(system: &mut S, error: ChildError) -> ! {
    let message = format!("{error}\n");
    match error {
        ChildError::Redirect(_) => system.print(&message),
        ChildError::Signal(_) | ChildError::Exec { .. } => system.print_error(&message),
    }
    system.exit(ExitStatus::FAILURE)
}

/// Executes an external utility.
///
/// If a new process cannot be created, this function returns
/// `Break(Divert::Abort(ExitStatus::FAILURE))` to terminate the shell.
/// Any other error is reported and absorbed.
pub fn execute_external<S: System>(env: &mut Env<S>, spec: &CommandSpec) -> Result {
    let command = match PreparedCommand::new(spec) {
        Ok(command) => command,
        Err(e) => {
            env.system.print_error(&format!("smallsh: {e}\n"));
            return Continue(());
        }
    };
    let background = spec.background_requested && !env.mode.is_on();
    if spec.background_requested && !background {
        tracing::debug!(command = %spec, "running in the foreground");
    }

    let child = match env.system.new_child_process() {
        Ok(ForkResult::Parent { child }) => child,
        Ok(ForkResult::Child) => {
            let error = run_in_child(&mut env.system, &command, Role::child(background));
            exit_child(&mut env.system, error)
        }
        Err(errno) => {
            let message = format!("smallsh: cannot create a child process: {}\n", errno.desc());
            env.system.print_error(&message);
            return Break(Divert::Abort(ExitStatus::FAILURE));
        }
    };

    if background {
        start_background(env, child);
    } else {
        wait_for_foreground(env, child);
    }
    Continue(())
}

fn start_background<S: System>(env: &mut Env<S>, pid: Pid) {
    env.system.print(&format!("background PID is {pid}\n"));
    match env.jobs.register(pid) {
        Ok(()) => tracing::debug!(%pid, jobs = env.jobs.len(), "registered background job"),
        Err(e) => {
            tracing::warn!(%pid, capacity = e.capacity, "job registry is full");
            env.system.print_error(&format!("smallsh: {e}\n"));
        }
    }
}

fn wait_for_foreground<S: System>(env: &mut Env<S>, pid: Pid) {
    let result = loop {
        match env.system.wait(pid, None) {
            Ok(Some(result)) => break result,
            // Stopped or continued
            Ok(None) => continue,
            Err(errno) => {
                let message = format!("smallsh: cannot wait for process {pid}: {}\n", errno.desc());
                env.system.print_error(&message);
                return;
            }
        }
    };

    tracing::debug!(%pid, %result, "foreground process finished");
    env.foreground.record(pid, result);
    if result.is_signaled() {
        env.system.print(&format!("{result}\n"));
    }
}
