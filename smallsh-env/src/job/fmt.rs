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

//! Process result formatting
//!
//! The shell reports the result of a process in the same words everywhere: in
//! the output of the `status` built-in, in the message printed right after a
//! foreground process is killed by a signal, and in the completion notice of a
//! background job.
//!
//! ```
//! use smallsh_env::job::{Pid, ProcessResult, Signal};
//! use smallsh_env::job::fmt::Done;
//! assert_eq!(ProcessResult::exited(0).to_string(), "exit value 0");
//! let result = ProcessResult::Signaled { signal: Signal::SIGTERM, core_dump: false };
//! assert_eq!(result.to_string(), "terminated by signal 15");
//! let done = Done { pid: Pid::from_raw(123), result };
//! assert_eq!(done.to_string(), "background pid 123 is done: terminated by signal 15");
//! ```

use super::Pid;
use super::ProcessResult;
use std::ffi::c_int;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Formats a process result into a string.
///
/// Process results are formatted as follows:
///
/// - `exit value N` for a process that exited with exit status `N`
/// - `terminated by signal N` for a process that was terminated by the signal
///   numbered `N`, regardless of a core dump
impl Display for ProcessResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Exited(exit_status) => write!(f, "exit value {exit_status}"),
            Self::Signaled { signal, .. } => {
                write!(f, "terminated by signal {}", *signal as c_int)
            }
        }
    }
}

/// Completion notice of a background job
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Done {
    pub pid: Pid,
    pub result: ProcessResult,
}

impl Display for Done {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "background pid {} is done: {}", self.pid, self.result)
    }
}
