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

//! Redirection of the standard input and output
//!
//! A command may redirect its standard input from a file with `< path` and its
//! standard output to a file with `> path`. The redirections are applied in
//! the child process only, after the signal dispositions have been set up and
//! before the utility is executed:
//!
//! - The input file is opened read-only.
//! - The output file is opened write-only. It is created with permissions
//!   `rw-r--r--` if missing and truncated if present.
//!
//! The opened file descriptor is duplicated onto the standard input or output
//! and the original is closed. The input redirection is performed first, so
//! the output file is not touched when the input file cannot be opened.

use smallsh_env::io::Fd;
use smallsh_env::system::Errno;
use smallsh_env::system::Mode;
use smallsh_env::system::OFlag;
use smallsh_env::system::System;
use smallsh_syntax::syntax::CommandSpec;
use std::ffi::CString;
use std::ffi::NulError;
use thiserror::Error;

/// Permissions of a file created by an output redirection
pub const OUTPUT_MODE: Mode = Mode::S_IRUSR
    .union(Mode::S_IWUSR)
    .union(Mode::S_IRGRP)
    .union(Mode::S_IROTH);

/// Error in performing a redirection
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RedirectError {
    /// The input file could not be opened.
    #[error("cannot open {} for input", .path.to_string_lossy())]
    Input { path: CString, errno: Errno },

    /// The output file could not be opened.
    #[error("cannot open {} for output", .path.to_string_lossy())]
    Output { path: CString, errno: Errno },

    /// The opened file could not be duplicated onto the target descriptor.
    #[error("cannot redirect file descriptor {fd}: {}", .errno.desc())]
    FdNotOverwritten { fd: Fd, errno: Errno },
}

/// Redirections of a command, converted for the system calls
///
/// The paths are converted before forking so that the child does not have to
/// allocate.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Redirections {
    /// Path to redirect the standard input from
    pub input: Option<CString>,
    /// Path to redirect the standard output to
    pub output: Option<CString>,
}

impl Redirections {
    /// Extracts the redirections from a command.
    ///
    /// Fails if a path contains a nul byte.
    pub fn from_spec(spec: &CommandSpec) -> Result<Self, NulError> {
        let input = spec.input_redirect.clone().map(CString::new).transpose()?;
        let output = spec.output_redirect.clone().map(CString::new).transpose()?;
        Ok(Redirections { input, output })
    }

    /// Performs the redirections in the current process.
    ///
    /// This function stops at the first error.
    pub fn apply<S: System + ?Sized>(&self, system: &mut S) -> Result<(), RedirectError> {
        if let Some(path) = &self.input {
            let fd = system
                .open(path, OFlag::O_RDONLY, Mode::empty())
                .map_err(|errno| RedirectError::Input {
                    path: path.clone(),
                    errno,
                })?;
            move_fd(system, fd, Fd::STDIN)?;
        }
        if let Some(path) = &self.output {
            let flags = OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC;
            let fd = system
                .open(path, flags, OUTPUT_MODE)
                .map_err(|errno| RedirectError::Output {
                    path: path.clone(),
                    errno,
                })?;
            move_fd(system, fd, Fd::STDOUT)?;
        }
        Ok(())
    }
}

/// Moves the open file from `from` to `to`.
fn move_fd<S: System + ?Sized>(system: &mut S, from: Fd, to: Fd) -> Result<(), RedirectError> {
    if from == to {
        return Ok(());
    }
    system
        .dup2(from, to)
        .map_err(|errno| RedirectError::FdNotOverwritten { fd: to, errno })?;
    system.close(from).ok();
    Ok(())
}
