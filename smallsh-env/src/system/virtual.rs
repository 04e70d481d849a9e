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

//! System simulated in Rust.
//!
//! [`VirtualSystem`] is a pure Rust implementation of [`System`] that simulates
//! the behavior of the underlying system without any interaction with the
//! actual system. `VirtualSystem` is used for testing the behavior of the shell
//! in unit tests.
//!
//! # File system
//!
//! Only regular files and directories are supported. Paths are resolved
//! lexically against the working directory; the `.` and `..` components and
//! symbolic links are not supported.
//!
//! # Processes
//!
//! Simulating `fork` always leaves the caller in the parent. The child is a
//! [`ProcessSlot`] whose termination is scripted by the test, either in
//! advance through [`SystemState::planned_results`] or later through
//! [`VirtualSystem::finish`]. Code that runs in a child process is tested by
//! calling it directly instead.
//!
//! # Signals
//!
//! Dispositions and the signal mask are only recorded. Sending `SIGKILL` to a
//! running child terminates it; other signals are only recorded.

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
use crate::semantics::ExitStatus;
use crate::signal::Disposition;
use crate::signal::Signal;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::ffi::CStr;
use std::ffi::CString;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt as _;
use std::path::Path;
use std::path::PathBuf;
use std::rc::Rc;

/// Regular file in the virtual file system
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct File {
    /// Content of the file
    pub content: Vec<u8>,
    /// Permission bits of the file
    pub permissions: Mode,
}

impl File {
    /// Creates a file that is readable and writable by the owner.
    pub fn new<C: Into<Vec<u8>>>(content: C) -> Self {
        File {
            content: content.into(),
            permissions: Mode::from_bits_truncate(0o644),
        }
    }
}

/// State of an open file description
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpenFileDescription {
    /// Path of the opened file
    pub path: PathBuf,
    /// Position in the file where the next read or write starts
    pub offset: usize,
    pub is_readable: bool,
    pub is_writable: bool,
    pub is_appending: bool,
}

/// State of a (virtual) child process
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProcessSlot {
    /// The process has not terminated.
    Running,
    /// The process has terminated but has not been waited for.
    Finished(ProcessResult),
    /// The process has terminated and has been waited for.
    Reaped,
}

/// State of the virtual system.
#[derive(Clone, Debug, Default)]
pub struct SystemState {
    /// Regular files
    pub files: BTreeMap<PathBuf, File>,

    /// Directories
    pub directories: BTreeSet<PathBuf>,

    /// Open file descriptors
    pub fds: BTreeMap<Fd, Rc<RefCell<OpenFileDescription>>>,

    /// Current working directory
    pub cwd: PathBuf,

    /// Environment variables
    pub env_vars: HashMap<String, String>,

    /// Signal dispositions set by `sigaction`
    pub dispositions: HashMap<Signal, Disposition>,

    /// Signals blocked by `sigmask`
    pub blocked_signals: HashSet<Signal>,

    /// Error `sigaction` fails with, if any
    pub sigaction_error: Option<Errno>,

    /// Child processes
    pub processes: BTreeMap<Pid, ProcessSlot>,

    /// Results of the processes created by future `fork`s
    ///
    /// Each `fork` pops the front of the queue. A child gets a popped result
    /// as already finished. If the queue is empty, the child is running.
    pub planned_results: VecDeque<ProcessResult>,

    /// Error `fork` fails with, if any
    pub fork_error: Option<Errno>,

    /// Names of utilities `execvp` finds
    ///
    /// `execvp` cannot replace the process image in the simulation. It fails
    /// with `ENOSYS` for a utility in this set and `ENOENT` otherwise.
    pub executables: BTreeSet<String>,

    /// Arguments passed to `execvp`
    pub exec_calls: Vec<(CString, Vec<CString>)>,

    /// Signals successfully sent by `kill`
    pub signals_sent: Vec<(Pid, Signal)>,
}

impl SystemState {
    /// Returns the disposition of the signal.
    pub fn disposition(&self, signal: Signal) -> Disposition {
        self.dispositions.get(&signal).copied().unwrap_or_default()
    }

    /// Returns the absolute path for the path.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }

    fn open_file_description(&self, fd: Fd) -> Result<Rc<RefCell<OpenFileDescription>>> {
        self.fds.get(&fd).cloned().ok_or(Errno::EBADF)
    }

    fn next_pid(&self) -> Pid {
        self.processes
            .keys()
            .max()
            .map_or(Pid::from_raw(3), |pid| Pid::from_raw(pid.as_raw() + 1))
    }
}

/// Simulated system.
///
/// See the [module-level documentation](self) to grasp a basic understanding of
/// `VirtualSystem`.
///
/// The state is contained in `Rc` so that clones of a `VirtualSystem` share
/// the same state. This allows a test to keep a handle to the state while the
/// system is owned by an [`Env`](crate::Env).
#[derive(Clone, Debug)]
pub struct VirtualSystem {
    /// State of the system.
    pub state: Rc<RefCell<SystemState>>,
}

impl VirtualSystem {
    /// Creates a virtual system with an almost empty state.
    ///
    /// The file system will contain files named `/dev/stdin`, `/dev/stdout`,
    /// and `/dev/stderr` that are opened with file descriptor 0, 1, and 2,
    /// respectively. The file system also contains the directories `/`, `/dev`
    /// and `/tmp`. The working directory is `/`.
    pub fn new() -> VirtualSystem {
        let mut state = SystemState {
            cwd: PathBuf::from("/"),
            ..SystemState::default()
        };
        for dir in ["/", "/dev", "/tmp"] {
            state.directories.insert(PathBuf::from(dir));
        }

        let mut set_std_fd = |path: &str, fd| {
            state.files.insert(PathBuf::from(path), File::new(Vec::new()));
            let description = OpenFileDescription {
                path: PathBuf::from(path),
                offset: 0,
                is_readable: true,
                is_writable: true,
                is_appending: true,
            };
            state.fds.insert(fd, Rc::new(RefCell::new(description)));
        };
        set_std_fd("/dev/stdin", Fd::STDIN);
        set_std_fd("/dev/stdout", Fd::STDOUT);
        set_std_fd("/dev/stderr", Fd::STDERR);

        let state = Rc::new(RefCell::new(state));
        VirtualSystem { state }
    }

    /// Creates or replaces a regular file.
    pub fn save_file<P: AsRef<Path>, C: Into<Vec<u8>>>(&self, path: P, content: C) {
        let mut state = self.state.borrow_mut();
        let path = state.resolve(path.as_ref());
        state.files.insert(path, File::new(content));
    }

    /// Returns the content of a regular file.
    pub fn file_content<P: AsRef<Path>>(&self, path: P) -> Option<Vec<u8>> {
        let state = self.state.borrow();
        let path = state.resolve(path.as_ref());
        state.files.get(&path).map(|file| file.content.clone())
    }

    /// Sets the content of the standard input.
    pub fn set_stdin(&self, content: &str) {
        self.save_file("/dev/stdin", content);
    }

    /// Returns what has been written to the standard output.
    pub fn stdout(&self) -> String {
        let content = self.file_content("/dev/stdout").unwrap_or_default();
        String::from_utf8_lossy(&content).into_owned()
    }

    /// Returns what has been written to the standard error.
    pub fn stderr(&self) -> String {
        let content = self.file_content("/dev/stderr").unwrap_or_default();
        String::from_utf8_lossy(&content).into_owned()
    }

    /// Adds a running child process without going through `fork`.
    pub fn spawn_dummy(&self) -> Pid {
        let mut state = self.state.borrow_mut();
        let pid = state.next_pid();
        state.processes.insert(pid, ProcessSlot::Running);
        pid
    }

    /// Makes a running child process terminate with the result.
    ///
    /// # Panics
    ///
    /// If the process is not running.
    pub fn finish(&self, pid: Pid, result: ProcessResult) {
        let mut state = self.state.borrow_mut();
        match state.processes.get_mut(&pid) {
            Some(slot) if *slot == ProcessSlot::Running => *slot = ProcessSlot::Finished(result),
            slot => panic!("process {pid} is not running: {slot:?}"),
        }
    }
}

impl Default for VirtualSystem {
    fn default() -> Self {
        VirtualSystem::new()
    }
}

fn path_of(path: &CStr) -> &Path {
    Path::new(OsStr::from_bytes(path.to_bytes()))
}

impl System for VirtualSystem {
    fn sigaction(&mut self, signal: Signal, disposition: Disposition) -> Result<Disposition> {
        let mut state = self.state.borrow_mut();
        if let Some(errno) = state.sigaction_error {
            return Err(errno);
        }
        let old = state.dispositions.insert(signal, disposition);
        Ok(old.unwrap_or_default())
    }

    fn sigmask(
        &mut self,
        how: SigmaskHow,
        set: Option<&SigSet>,
        oldset: Option<&mut SigSet>,
    ) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(oldset) = oldset {
            *oldset = SigSet::empty();
            for &signal in &state.blocked_signals {
                oldset.add(signal);
            }
        }
        if let Some(set) = set {
            match how {
                SigmaskHow::SIG_BLOCK => state.blocked_signals.extend(set.iter()),
                SigmaskHow::SIG_UNBLOCK => {
                    for signal in set.iter() {
                        state.blocked_signals.remove(&signal);
                    }
                }
                SigmaskHow::SIG_SETMASK => state.blocked_signals = set.iter().collect(),
                _ => return Err(Errno::EINVAL),
            }
        }
        Ok(())
    }

    fn open(&mut self, path: &CStr, flags: OFlag, mode: Mode) -> Result<Fd> {
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        let path = state.resolve(path_of(path));
        let is_writable = flags.intersects(OFlag::O_WRONLY | OFlag::O_RDWR);
        let is_readable = !flags.contains(OFlag::O_WRONLY);

        if state.directories.contains(&path) {
            return Err(Errno::EISDIR);
        }
        match state.files.get_mut(&path) {
            Some(file) => {
                let granted = file.permissions;
                if (is_readable && !granted.contains(Mode::S_IRUSR))
                    || (is_writable && !granted.contains(Mode::S_IWUSR))
                {
                    return Err(Errno::EACCES);
                }
                if is_writable && flags.contains(OFlag::O_TRUNC) {
                    file.content.clear();
                }
            }
            None if flags.contains(OFlag::O_CREAT) => {
                let parent_exists = path
                    .parent()
                    .is_some_and(|parent| state.directories.contains(parent));
                if !parent_exists {
                    return Err(Errno::ENOENT);
                }
                let file = File {
                    content: Vec::new(),
                    permissions: mode,
                };
                state.files.insert(path.clone(), file);
            }
            None => return Err(Errno::ENOENT),
        }

        let fd = (0..)
            .map(Fd)
            .find(|fd| !state.fds.contains_key(fd))
            .ok_or(Errno::EMFILE)?;
        let description = OpenFileDescription {
            path,
            offset: 0,
            is_readable,
            is_writable,
            is_appending: flags.contains(OFlag::O_APPEND),
        };
        state.fds.insert(fd, Rc::new(RefCell::new(description)));
        Ok(fd)
    }

    fn dup2(&mut self, from: Fd, to: Fd) -> Result<Fd> {
        let mut state = self.state.borrow_mut();
        let description = state.open_file_description(from)?;
        state.fds.insert(to, description);
        Ok(to)
    }

    fn close(&mut self, fd: Fd) -> Result<()> {
        self.state.borrow_mut().fds.remove(&fd);
        Ok(())
    }

    fn read(&mut self, fd: Fd, buffer: &mut [u8]) -> Result<usize> {
        let state = self.state.borrow();
        let description = state.open_file_description(fd)?;
        let mut description = description.borrow_mut();
        if !description.is_readable {
            return Err(Errno::EBADF);
        }
        let file = state.files.get(&description.path).ok_or(Errno::EIO)?;
        let rest = file.content.get(description.offset..).unwrap_or_default();
        let count = rest.len().min(buffer.len());
        buffer[..count].copy_from_slice(&rest[..count]);
        description.offset += count;
        Ok(count)
    }

    fn write(&mut self, fd: Fd, buffer: &[u8]) -> Result<usize> {
        let mut state = self.state.borrow_mut();
        let description = state.open_file_description(fd)?;
        let mut description = description.borrow_mut();
        if !description.is_writable {
            return Err(Errno::EBADF);
        }
        let file = state.files.get_mut(&description.path).ok_or(Errno::EIO)?;
        if description.is_appending {
            description.offset = file.content.len();
        }
        let start = description.offset;
        let end = start + buffer.len();
        if file.content.len() < end {
            file.content.resize(end, 0);
        }
        file.content[start..end].copy_from_slice(buffer);
        description.offset = end;
        Ok(buffer.len())
    }

    fn new_child_process(&mut self) -> Result<ForkResult> {
        let mut state = self.state.borrow_mut();
        if let Some(errno) = state.fork_error {
            return Err(errno);
        }
        let child = state.next_pid();
        let slot = match state.planned_results.pop_front() {
            Some(result) => ProcessSlot::Finished(result),
            None => ProcessSlot::Running,
        };
        state.processes.insert(child, slot);
        Ok(ForkResult::Parent { child })
    }

    fn execvp(&mut self, file: &CStr, args: &[CString]) -> Result<Infallible> {
        let mut state = self.state.borrow_mut();
        state.exec_calls.push((file.to_owned(), args.to_owned()));
        let found = state.executables.contains(&*file.to_string_lossy());
        Err(if found { Errno::ENOSYS } else { Errno::ENOENT })
    }

    /// Reports the result of a terminated child process.
    ///
    /// # Panics
    ///
    /// A blocking wait for a running process panics because it would never
    /// return in the simulation.
    fn wait(&mut self, target: Pid, options: Option<WaitPidFlag>) -> Result<Option<ProcessResult>> {
        let mut state = self.state.borrow_mut();
        let slot = state.processes.get_mut(&target).ok_or(Errno::ECHILD)?;
        match *slot {
            ProcessSlot::Finished(result) => {
                *slot = ProcessSlot::Reaped;
                Ok(Some(result))
            }
            ProcessSlot::Running
                if options.is_some_and(|options| options.contains(WaitPidFlag::WNOHANG)) =>
            {
                Ok(None)
            }
            ProcessSlot::Running => panic!("blocking wait for running process {target}"),
            ProcessSlot::Reaped => Err(Errno::ECHILD),
        }
    }

    fn kill(&mut self, target: Pid, signal: Signal) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        let slot = state.processes.get_mut(&target).ok_or(Errno::ESRCH)?;
        match *slot {
            ProcessSlot::Reaped => return Err(Errno::ESRCH),
            ProcessSlot::Running if signal == Signal::SIGKILL => {
                *slot = ProcessSlot::Finished(ProcessResult::Signaled {
                    signal,
                    core_dump: false,
                });
            }
            ProcessSlot::Running | ProcessSlot::Finished(_) => (),
        }
        state.signals_sent.push((target, signal));
        Ok(())
    }

    /// Panics.
    ///
    /// The simulated process cannot exit.
    fn exit(&mut self, exit_status: ExitStatus) -> ! {
        panic!("exit({exit_status}) called in the virtual system")
    }

    /// Changes the working directory.
    ///
    /// The new path is not canonicalized.
    fn chdir(&mut self, path: &CStr) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let path = state.resolve(path_of(path));
        if state.directories.contains(&path) {
            state.cwd = path;
            Ok(())
        } else if state.files.contains_key(&path) {
            Err(Errno::ENOTDIR)
        } else {
            Err(Errno::ENOENT)
        }
    }

    fn getcwd(&self) -> Result<PathBuf> {
        Ok(self.state.borrow().cwd.clone())
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.state.borrow().env_vars.get(name).cloned()
    }
}
