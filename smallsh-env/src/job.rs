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

//! Type definitions for background job management.
//!
//! A background process started by the shell is tracked as a [`Job`] in the
//! [`JobRegistry`] until the reaper observes its termination. The registry has
//! a fixed capacity; registering a job when the registry is full fails with a
//! [`RegistryFullError`] instead of silently forgetting the process.
//!
//! Jobs are kept in the order they were registered, which is also the order in
//! which their terminations are reported.

pub mod fmt;

use crate::semantics::ExitStatus;
#[doc(no_inline)]
pub use nix::sys::signal::Signal;
#[doc(no_inline)]
pub use nix::sys::wait::WaitStatus;
#[doc(no_inline)]
pub use nix::unistd::Pid;
use thiserror::Error;

/// Result of a process that has terminated
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ProcessResult {
    /// The process exited with the exit status
    Exited(ExitStatus),
    /// The process was terminated by the signal
    Signaled { signal: Signal, core_dump: bool },
}

impl ProcessResult {
    /// Creates a new `ProcessResult::Exited` instance.
    #[inline]
    #[must_use]
    pub fn exited<S: Into<ExitStatus>>(exit_status: S) -> Self {
        Self::Exited(exit_status.into())
    }

    /// Whether the process was terminated by a signal
    #[must_use]
    pub fn is_signaled(&self) -> bool {
        matches!(self, Self::Signaled { .. })
    }

    /// Converts a `WaitStatus` to a `ProcessResult`.
    ///
    /// Only `Exited` and `Signaled` describe a terminated process. Other wait
    /// statuses are converted to `None`.
    #[must_use]
    pub fn from_wait_status(status: WaitStatus) -> Option<Self> {
        match status {
            WaitStatus::Exited(_, exit_status) => Some(Self::exited(exit_status)),
            WaitStatus::Signaled(_, signal, core_dump) => {
                Some(Self::Signaled { signal, core_dump })
            }
            _ => None,
        }
    }
}

/// Background process tracked by the shell
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Job {
    /// Process ID
    pub pid: Pid,
}

impl Job {
    /// Creates a new job for the process.
    #[inline]
    #[must_use]
    pub fn new(pid: Pid) -> Self {
        Job { pid }
    }
}

/// Error returned when registering a job in a full [`JobRegistry`]
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("cannot track background process {pid}: too many background jobs (limit {capacity})")]
pub struct RegistryFullError {
    /// Process ID of the job that could not be registered
    pub pid: Pid,
    /// Capacity of the registry
    pub capacity: usize,
}

/// Bounded collection of background jobs
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JobRegistry {
    jobs: Vec<Job>,
    capacity: usize,
}

impl JobRegistry {
    /// Default number of jobs a registry can hold
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates an empty registry that can hold `capacity` jobs.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JobRegistry {
            jobs: Vec::new(),
            capacity,
        }
    }

    /// Returns the maximum number of jobs this registry can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of jobs currently registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if no job is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Returns true if the registry cannot accept any more jobs.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.jobs.len() >= self.capacity
    }

    /// Adds a job for the process.
    ///
    /// If the registry already has as many jobs as its capacity, the job is
    /// not added and an error is returned. Registering a process ID that is
    /// already in the registry is a no-op.
    pub fn register(&mut self, pid: Pid) -> Result<(), RegistryFullError> {
        if self.contains(pid) {
            return Ok(());
        }
        if self.is_full() {
            return Err(RegistryFullError {
                pid,
                capacity: self.capacity,
            });
        }
        self.jobs.push(Job::new(pid));
        Ok(())
    }

    /// Removes the job for the process.
    ///
    /// Returns the removed job, or `None` if the process was not registered.
    /// The order of the remaining jobs is preserved.
    pub fn remove(&mut self, pid: Pid) -> Option<Job> {
        let index = self.jobs.iter().position(|job| job.pid == pid)?;
        Some(self.jobs.remove(index))
    }

    /// Returns true if the process is registered.
    #[must_use]
    pub fn contains(&self, pid: Pid) -> bool {
        self.jobs.iter().any(|job| job.pid == pid)
    }

    /// Returns an iterator over the jobs in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    /// Returns the process IDs of all jobs in registration order.
    #[must_use]
    pub fn pids(&self) -> Vec<Pid> {
        self.jobs.iter().map(|job| job.pid).collect()
    }

    /// Removes all jobs.
    pub fn clear(&mut self) {
        self.jobs.clear()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a JobRegistry {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
