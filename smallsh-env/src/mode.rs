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

//! Foreground-only mode
//!
//! In foreground-only mode, a trailing `&` on a command line is ignored and
//! every command runs in the foreground. The mode is toggled by each SIGTSTP
//! the shell receives. Since the toggle happens in a signal handler that may
//! interrupt the shell at any point, the mode is an [`AtomicBool`] and the
//! handler only flips it and writes a fixed message with a raw `write`.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Message printed when foreground-only mode is turned on
pub const ENTER_MESSAGE: &str = "\nEntering foreground-only mode (& is now ignored)\n: ";

/// Message printed when foreground-only mode is turned off
pub const EXIT_MESSAGE: &str = "\nExiting foreground-only mode\n: ";

/// Process-wide foreground-only mode flag
///
/// This is the flag the SIGTSTP handler of
/// [`RealSystem`](crate::RealSystem) flips.
pub static FOREGROUND_ONLY: AtomicBool = AtomicBool::new(false);

/// Handle to a foreground-only mode flag
#[derive(Clone, Copy, Debug)]
pub struct ForegroundOnlyMode(&'static AtomicBool);

impl ForegroundOnlyMode {
    /// Returns a handle to the process-wide flag [`FOREGROUND_ONLY`].
    #[must_use]
    pub fn global() -> Self {
        ForegroundOnlyMode(&FOREGROUND_ONLY)
    }

    /// Returns a handle to a new flag that is initially off.
    ///
    /// The flag is never deallocated. This is meant for environments that
    /// should not share the process-wide flag, such as those used in tests.
    #[must_use]
    pub fn detached() -> Self {
        ForegroundOnlyMode(Box::leak(Box::new(AtomicBool::new(false))))
    }

    /// Tests whether foreground-only mode is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Flips the mode.
    ///
    /// `announce` is called with [`ENTER_MESSAGE`] or [`EXIT_MESSAGE`]
    /// depending on the new mode. This function is async-signal-safe as long
    /// as `announce` is. Returns the new mode.
    pub fn toggle<F: FnOnce(&'static str)>(&self, announce: F) -> bool {
        let was_on = self.0.fetch_xor(true, Ordering::SeqCst);
        announce(if was_on { EXIT_MESSAGE } else { ENTER_MESSAGE });
        !was_on
    }
}
