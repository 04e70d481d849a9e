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

//! This crate defines the shell execution environment.
//!
//! A shell execution environment, [`Env`], is a collection of data that may
//! affect or be affected by the execution of commands. It owns the table of
//! built-ins, the registry of background jobs, the result of the last
//! foreground command, and a handle to the foreground-only mode flag that the
//! SIGTSTP handler flips.
//!
//! The [`System`] trait is the interface to the underlying operating system.
//! [`RealSystem`] provides an implementation for `System` that interacts with
//! the underlying system. [`VirtualSystem`] is a dummy for simulating the
//! system's behavior without affecting the actual system.

pub mod builtin;
pub mod input;
pub mod io;
pub mod job;
pub mod mode;
pub mod semantics;
pub mod signal;
pub mod status;
pub mod system;

use self::builtin::Builtin;
use self::job::JobRegistry;
use self::mode::ForegroundOnlyMode;
use self::status::ForegroundStatus;
pub use self::system::System;
pub use self::system::SystemEx;
pub use self::system::real::RealSystem;
pub use self::system::r#virtual::VirtualSystem;
use nix::errno::Errno;
use nix::sys::signal::Signal;
use std::collections::HashMap;

/// Whole shell execution environment.
///
/// There is only one `Env` in a running shell. Everything except the
/// foreground-only mode flag is owned and mutated by the main flow only.
#[derive(Debug)]
pub struct Env<S> {
    /// Built-in utilities available in the environment
    pub builtins: HashMap<&'static str, Builtin<S>>,

    /// Background processes that have not been reaped yet
    pub jobs: JobRegistry,

    /// Result of the most recent foreground process
    pub foreground: ForegroundStatus,

    /// Flag deciding whether `&` is honored
    pub mode: ForegroundOnlyMode,

    /// Interface to the system-managed parts of the environment
    pub system: S,
}

impl<S: System> Env<S> {
    /// Creates a new environment with the given system.
    ///
    /// The returned environment uses the process-wide foreground-only mode
    /// flag, the one flipped by the SIGTSTP handler of [`RealSystem`].
    /// Built-ins are not installed.
    pub fn with_system(system: S) -> Self {
        Env {
            builtins: HashMap::new(),
            jobs: JobRegistry::default(),
            foreground: ForegroundStatus::default(),
            mode: ForegroundOnlyMode::global(),
            system,
        }
    }

    /// Forcibly terminates all background jobs.
    ///
    /// This function sends `SIGKILL` to every job in the registry and then
    /// empties the registry. Jobs that no longer exist are skipped silently.
    pub fn kill_all_jobs(&mut self) {
        for pid in self.jobs.pids() {
            match self.system.kill(pid, Signal::SIGKILL) {
                Ok(()) => tracing::debug!(%pid, "killed background job"),
                Err(Errno::ESRCH) => (),
                Err(errno) => tracing::warn!(%pid, %errno, "cannot kill background job"),
            }
        }
        self.jobs.clear();
    }
}

impl Env<VirtualSystem> {
    /// Creates a new environment with a default virtual system.
    ///
    /// This function is meant for testing. The environment gets its own
    /// foreground-only mode flag so that tests do not interfere with each
    /// other through the process-wide one.
    pub fn new_virtual() -> Self {
        Env {
            mode: ForegroundOnlyMode::detached(),
            ..Env::with_system(VirtualSystem::new())
        }
    }
}
