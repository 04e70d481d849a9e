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

//! Signal dispositions per process role
//!
//! The shell and its children react differently to SIGINT and SIGTSTP:
//!
//! | Role             | SIGINT  | SIGTSTP                      |
//! |------------------|---------|------------------------------|
//! | Shell            | ignored | toggles foreground-only mode |
//! | Foreground child | default | ignored                      |
//! | Background child | ignored | ignored                      |
//!
//! A child applies its dispositions right after it is created, before any
//! redirection or `exec`, and clears the signal mask at the same time so the
//! executed program does not inherit blocked signals.

use crate::system::SigSet;
use crate::system::SigmaskHow;
use crate::system::System;
#[doc(no_inline)]
pub use nix::sys::signal::Signal;
use strum::EnumIter;
use strum::IntoStaticStr;

/// How a process responds to a signal
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Disposition {
    /// Performs the default action for the signal
    #[default]
    Default,
    /// Ignores the signal
    Ignore,
    /// Runs the shell's signal handler
    Catch,
}

/// Role of a process with regard to signal handling
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    /// The shell itself
    Shell,
    /// Child process the shell waits for
    ForegroundChild,
    /// Child process running in the background
    BackgroundChild,
}

impl Role {
    /// Returns the child role for the effective background-ness of a command.
    #[must_use]
    pub fn child(background: bool) -> Self {
        if background {
            Role::BackgroundChild
        } else {
            Role::ForegroundChild
        }
    }
}

/// Dispositions of the signals the shell cares about
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Dispositions {
    pub sigint: Disposition,
    pub sigtstp: Disposition,
}

/// Computes the dispositions a process in the role should have.
#[must_use]
pub fn dispositions_for(role: Role) -> Dispositions {
    match role {
        Role::Shell => Dispositions {
            sigint: Disposition::Ignore,
            sigtstp: Disposition::Catch,
        },
        Role::ForegroundChild => Dispositions {
            sigint: Disposition::Default,
            sigtstp: Disposition::Ignore,
        },
        Role::BackgroundChild => Dispositions {
            sigint: Disposition::Ignore,
            sigtstp: Disposition::Ignore,
        },
    }
}

/// Applies the dispositions for the role to the current process.
///
/// This function sets the dispositions of SIGINT and SIGTSTP and then unblocks
/// all signals. An error from any of the underlying system calls is returned
/// as is; the remaining steps are not performed.
pub fn apply_dispositions<S: System + ?Sized>(system: &mut S, role: Role) -> nix::Result<()> {
    let dispositions = dispositions_for(role);
    system.sigaction(Signal::SIGINT, dispositions.sigint)?;
    system.sigaction(Signal::SIGTSTP, dispositions.sigtstp)?;
    system.sigmask(SigmaskHow::SIG_SETMASK, Some(&SigSet::empty()), None)
}
