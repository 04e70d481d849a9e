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

//! Result of the last foreground process

use crate::job::Pid;
use crate::job::ProcessResult;
use crate::semantics::ExitStatus;

/// Result of the most recently completed foreground process
///
/// The shell records the result of every foreground process after
/// the blocking wait. The `status` built-in reads it. Until a foreground
/// process has run, there is no result and [`result`](Self::result) reports a
/// successful exit.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ForegroundStatus {
    last: Option<(Pid, ProcessResult)>,
}

impl ForegroundStatus {
    /// Records the result of a foreground process.
    pub fn record(&mut self, pid: Pid, result: ProcessResult) {
        self.last = Some((pid, result));
    }

    /// Returns the process ID of the last foreground process, if any.
    #[must_use]
    pub fn last_pid(&self) -> Option<Pid> {
        self.last.map(|(pid, _)| pid)
    }

    /// Returns the result of the last foreground process.
    ///
    /// If no foreground process has run yet, the result is an exit with
    /// status 0.
    #[must_use]
    pub fn result(&self) -> ProcessResult {
        self.last
            .map_or(ProcessResult::Exited(ExitStatus::SUCCESS), |(_, result)| result)
    }
}
