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

//! Implementation of `System` that actually interacts with the system.

use super::Errno;
use super::ForkResult;
use super::Mode;
use super::OFlag;
use super::Result;
use super::SigSet;
use super::SigmaskHow;
use super::System;
use super::WaitPidFlag;
use crate::io::Fd;
use crate::job::Pid;
use crate::job::ProcessResult;
use crate::mode::ForegroundOnlyMode;
use crate::semantics::ExitStatus;
use crate::signal::Disposition;
use crate::signal::Signal;
use nix::sys::signal::SaFlags;
use nix::sys::signal::SigAction;
use nix::sys::signal::SigHandler;
use std::convert::Infallible;
use std::ffi::CStr;
use std::ffi::CString;
use std::ffi::c_int;
use std::path::PathBuf;

/// Signal catching function for SIGTSTP.
///
/// This function flips the foreground-only mode and writes the corresponding
/// message to the standard output. It can only perform async-signal-safe
/// operations, so the message is written with a single raw `write` and errors
/// are ignored. `errno` is restored before returning so that the interrupted
/// code does not see a value set by the handler.
extern "C" fn catch_sigtstp(_signal: c_int) {
    let saved_errno = Errno::last_raw();
    ForegroundOnlyMode::global().toggle(|message| {
        // SAFETY: `write` is async-signal-safe and the buffer is a static
        // string.
        unsafe {
            libc::write(libc::STDOUT_FILENO, message.as_ptr().cast(), message.len());
        }
    });
    Errno::set_raw(saved_errno);
}

/// Implementation of `System` that actually interacts with the system.
///
/// `RealSystem` is an empty `struct` because the underlying operating system
/// manages the system's internal state.
#[derive(Debug)]
pub struct RealSystem(());

impl RealSystem {
    /// Returns an instance of `RealSystem`.
    ///
    /// # Safety
    ///
    /// This function is marked `unsafe` because improper use of `RealSystem`
    /// may lead to undefined behavior. Remember that most operations performed
    /// on the system by [`Env`](crate::Env) are not thread-safe. You should
    /// never use `RealSystem` in a multi-threaded program, and it is your
    /// responsibility to make sure you are using only one instance of
    /// `RealSystem` in the process.
    pub unsafe fn new() -> Self {
        RealSystem(())
    }
}

impl System for RealSystem {
    /// Changes the disposition of a signal.
    ///
    /// `Disposition::Catch` installs the foreground-only mode toggle, so it is
    /// accepted for SIGTSTP only. The handler is installed with `SA_RESTART`
    /// and blocks all other signals while it runs.
    fn sigaction(&mut self, signal: Signal, disposition: Disposition) -> Result<Disposition> {
        let new_action = match disposition {
            Disposition::Default => {
                SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty())
            }
            Disposition::Ignore => {
                SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty())
            }
            Disposition::Catch if signal != Signal::SIGTSTP => return Err(Errno::EINVAL),
            Disposition::Catch => SigAction::new(
                SigHandler::Handler(catch_sigtstp),
                SaFlags::SA_RESTART,
                SigSet::all(),
            ),
        };
        // SAFETY: The `catch_sigtstp` function only performs async-signal-safe
        // operations.
        let old_action = unsafe { nix::sys::signal::sigaction(signal, &new_action) }?;
        let old_disposition = match old_action.handler() {
            SigHandler::SigDfl => Disposition::Default,
            SigHandler::SigIgn => Disposition::Ignore,
            SigHandler::Handler(_) | SigHandler::SigAction(_) => Disposition::Catch,
        };
        Ok(old_disposition)
    }

    fn sigmask(
        &mut self,
        how: SigmaskHow,
        set: Option<&SigSet>,
        oldset: Option<&mut SigSet>,
    ) -> Result<()> {
        nix::sys::signal::sigprocmask(how, set, oldset)
    }

    fn open(&mut self, path: &CStr, flags: OFlag, mode: Mode) -> Result<Fd> {
        loop {
            let result = unsafe {
                libc::open(path.as_ptr(), flags.bits(), mode.bits() as libc::c_uint)
            };
            match Errno::result(result) {
                Err(Errno::EINTR) => (),
                result => return result.map(Fd),
            }
        }
    }

    fn dup2(&mut self, from: Fd, to: Fd) -> Result<Fd> {
        loop {
            let result = unsafe { libc::dup2(from.0, to.0) };
            match Errno::result(result) {
                Err(Errno::EINTR) => (),
                result => return result.map(Fd),
            }
        }
    }

    fn close(&mut self, fd: Fd) -> Result<()> {
        loop {
            let result = unsafe { libc::close(fd.0) };
            match Errno::result(result) {
                Ok(_) | Err(Errno::EBADF) => return Ok(()),
                Err(Errno::EINTR) => (),
                Err(errno) => return Err(errno),
            }
        }
    }

    fn read(&mut self, fd: Fd, buffer: &mut [u8]) -> Result<usize> {
        loop {
            let result = unsafe { libc::read(fd.0, buffer.as_mut_ptr().cast(), buffer.len()) };
            match Errno::result(result) {
                Err(Errno::EINTR) => (),
                result => return result.map(|count| count as usize),
            }
        }
    }

    fn write(&mut self, fd: Fd, buffer: &[u8]) -> Result<usize> {
        loop {
            let result = unsafe { libc::write(fd.0, buffer.as_ptr().cast(), buffer.len()) };
            match Errno::result(result) {
                Err(Errno::EINTR) => (),
                result => return result.map(|count| count as usize),
            }
        }
    }

    fn new_child_process(&mut self) -> Result<ForkResult> {
        // SAFETY: As stated on RealSystem::new, the caller is responsible for
        // keeping the process single-threaded.
        unsafe { nix::unistd::fork() }
    }

    fn execvp(&mut self, file: &CStr, args: &[CString]) -> Result<Infallible> {
        nix::unistd::execvp(file, args)
    }

    fn wait(&mut self, target: Pid, options: Option<WaitPidFlag>) -> Result<Option<ProcessResult>> {
        loop {
            match nix::sys::wait::waitpid(target, options) {
                Ok(status) => return Ok(ProcessResult::from_wait_status(status)),
                Err(Errno::EINTR) => (),
                Err(errno) => return Err(errno),
            }
        }
    }

    fn kill(&mut self, target: Pid, signal: Signal) -> Result<()> {
        nix::sys::signal::kill(target, signal)
    }

    fn exit(&mut self, exit_status: ExitStatus) -> ! {
        std::process::exit(exit_status.0)
    }

    fn chdir(&mut self, path: &CStr) -> Result<()> {
        nix::unistd::chdir(path)
    }

    fn getcwd(&self) -> Result<PathBuf> {
        nix::unistd::getcwd()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
