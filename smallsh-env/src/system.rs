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

//! [System] and its implementors.

pub mod real;
pub mod r#virtual;

use crate::io::Fd;
use crate::job::Pid;
use crate::job::ProcessResult;
use crate::semantics::ExitStatus;
use crate::signal::Disposition;
use crate::signal::Signal;
#[doc(no_inline)]
pub use nix::errno::Errno;
#[doc(no_inline)]
pub use nix::fcntl::OFlag;
#[doc(no_inline)]
pub use nix::sys::signal::SigSet;
#[doc(no_inline)]
pub use nix::sys::signal::SigmaskHow;
#[doc(no_inline)]
pub use nix::sys::stat::Mode;
#[doc(no_inline)]
pub use nix::sys::wait::WaitPidFlag;
#[doc(no_inline)]
pub use nix::unistd::ForkResult;
use std::convert::Infallible;
use std::ffi::CStr;
use std::ffi::CString;
use std::fmt::Debug;
use std::path::PathBuf;

/// Result type of system calls
pub type Result<T> = std::result::Result<T, Errno>;

/// API to the system-managed parts of the environment.
///
/// The `System` trait defines a collection of methods to access the underlying
/// operating system from the shell as an application program. There are two
/// substantial implementors for this trait: [`RealSystem`](real::RealSystem)
/// and [`VirtualSystem`](r#virtual::VirtualSystem).
pub trait System: Debug {
    /// Changes the disposition of a signal.
    ///
    /// Returns the previous disposition.
    fn sigaction(&mut self, signal: Signal, disposition: Disposition) -> Result<Disposition>;

    /// Gets and/or sets the signal blocking mask.
    fn sigmask(
        &mut self,
        how: SigmaskHow,
        set: Option<&SigSet>,
        oldset: Option<&mut SigSet>,
    ) -> Result<()>;

    /// Opens a file descriptor.
    ///
    /// This is a thin wrapper around the `open` system call.
    fn open(&mut self, path: &CStr, flags: OFlag, mode: Mode) -> Result<Fd>;

    /// Duplicates a file descriptor.
    ///
    /// This is a thin wrapper around the `dup2` system call.
    fn dup2(&mut self, from: Fd, to: Fd) -> Result<Fd>;

    /// Closes a file descriptor.
    ///
    /// This function succeeds if the file descriptor is not open.
    fn close(&mut self, fd: Fd) -> Result<()>;

    /// Reads from the file descriptor.
    ///
    /// Returns the number of bytes read, which is zero at the end of file.
    fn read(&mut self, fd: Fd, buffer: &mut [u8]) -> Result<usize>;

    /// Writes to the file descriptor.
    ///
    /// Returns the number of bytes written.
    fn write(&mut self, fd: Fd, buffer: &[u8]) -> Result<usize>;

    /// Creates a new child process.
    ///
    /// This is a thin wrapper around the `fork` system call. The child gets a
    /// copy of the whole process, so the caller must be careful about what it
    /// does in the child before [`execvp`](Self::execvp) or
    /// [`exit`](Self::exit).
    fn new_child_process(&mut self) -> Result<ForkResult>;

    /// Replaces the current process with an external utility.
    ///
    /// `file` is searched for in `$PATH` unless it contains a slash.
    /// This function returns only on failure.
    fn execvp(&mut self, file: &CStr, args: &[CString]) -> Result<Infallible>;

    /// Reports the result of a terminated child process.
    ///
    /// With `WaitPidFlag::WNOHANG` in `options`, this function returns
    /// `Ok(None)` if the child is still running. Without it, this function
    /// blocks until the child terminates.
    ///
    /// A child that has been reported can no longer be waited for and results
    /// in `Err(Errno::ECHILD)`.
    fn wait(&mut self, target: Pid, options: Option<WaitPidFlag>) -> Result<Option<ProcessResult>>;

    /// Sends a signal to a process.
    fn kill(&mut self, target: Pid, signal: Signal) -> Result<()>;

    /// Terminates the current process with the exit status.
    fn exit(&mut self, exit_status: ExitStatus) -> !;

    /// Changes the working directory.
    fn chdir(&mut self, path: &CStr) -> Result<()>;

    /// Returns the current working directory path.
    fn getcwd(&self) -> Result<PathBuf>;

    /// Returns the value of an environment variable.
    ///
    /// Returns `None` if the variable is not set or its value is not valid
    /// UTF-8.
    fn env_var(&self, name: &str) -> Option<String>;
}

/// Extension for [`System`]
///
/// This trait provides some extension methods for `System`.
pub trait SystemEx: System {
    /// Writes the whole buffer to the file descriptor.
    ///
    /// This function calls [`write`](System::write) repeatedly until the
    /// whole buffer is written or an error occurs.
    fn write_all(&mut self, fd: Fd, mut buffer: &[u8]) -> Result<()> {
        while !buffer.is_empty() {
            let count = self.write(fd, buffer)?;
            if count == 0 {
                return Err(Errno::EIO);
            }
            buffer = &buffer[count..];
        }
        Ok(())
    }

    /// Prints the text to the standard output.
    ///
    /// Errors are ignored.
    fn print(&mut self, text: &str) {
        self.write_all(Fd::STDOUT, text.as_bytes()).ok();
    }

    /// Prints the message to the standard error.
    ///
    /// Errors are ignored.
    fn print_error(&mut self, message: &str) {
        self.write_all(Fd::STDERR, message.as_bytes()).ok();
    }
}

impl<T: System + ?Sized> SystemEx for T {}
