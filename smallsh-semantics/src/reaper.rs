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

//! Reporting finished background jobs

use smallsh_env::Env;
use smallsh_env::System;
use smallsh_env::SystemEx as _;
use smallsh_env::job::Pid;
use smallsh_env::job::ProcessResult;
use smallsh_env::job::fmt::Done;
use smallsh_env::system::Errno;
use smallsh_env::system::WaitPidFlag;

/// Reports and removes background jobs that have finished.
///
/// This function checks every job in the registry without blocking, in the
/// order the jobs were registered. For each finished job, it prints
/// `background pid P is done: ...` to the standard output and removes the job
/// from the registry. Jobs that are still running are left as they are.
///
/// A job the system no longer knows as a child of the shell is removed
/// without a report.
///
/// Returns the finished jobs in the order they were reported.
pub fn reap_completed<S: System>(env: &mut Env<S>) -> Vec<(Pid, ProcessResult)> {
    let mut reaped = Vec::new();
    for pid in env.jobs.pids() {
        match env.system.wait(pid, Some(WaitPidFlag::WNOHANG)) {
            Ok(None) => (),
            Ok(Some(result)) => {
                env.system.print(&format!("{}\n", Done { pid, result }));
                env.jobs.remove(pid);
                reaped.push((pid, result));
            }
            Err(Errno::ECHILD) => {
                tracing::debug!(%pid, "background job vanished");
                env.jobs.remove(pid);
            }
            Err(errno) => tracing::warn!(%pid, %errno, "cannot check background job"),
        }
    }
    reaped
}
